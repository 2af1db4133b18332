//! URL Utility Functions
//!
//! Resolution of the references found in article markup against the page
//! URL, plus the small helpers the block converter needs to name files.
//!
//! Resolution is deliberately rule based rather than RFC 3986 joining:
//! path-relative references (`foo.html`, `../foo.html`) never occur in the
//! article template and are rejected instead of being guessed at.

use url::Url;

use crate::error::{Error, Result};

/// Site serving the articles.
pub const SITE_URL: &str = "http://what-if.xkcd.com";

/// Reference prefixes returned unchanged by [`resolve`].
const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "ftp://", "doi:"];

/// Resolve a reference found in the article into an absolute URL.
///
/// Rules, in priority order:
/// 1. empty reference: the context page without its fragment
/// 2. `#fragment`: the context page without its fragment, plus the fragment
/// 3. `//host/path`: the context scheme plus the reference
/// 4. `/path`: `scheme://host` of the context plus the path
/// 5. `http://`, `https://`, `ftp://`, `doi:`: unchanged
///
/// Anything else fails with [`Error::UnsupportedUrlKind`].
///
/// # Examples
///
/// ```
/// use rs_whatif::url_utils::resolve;
///
/// let page = "https://what-if.xkcd.com/42/#x";
/// assert_eq!(resolve("/imgs/a.png", page)?, "https://what-if.xkcd.com/imgs/a.png");
/// assert_eq!(resolve("#fn1", page)?, "https://what-if.xkcd.com/42/#fn1");
/// assert_eq!(resolve("//xkcd.com/1/", page)?, "https://xkcd.com/1/");
/// assert!(resolve("foo.html", page).is_err());
/// # Ok::<(), rs_whatif::Error>(())
/// ```
pub fn resolve(reference: &str, context_url: &str) -> Result<String> {
    let reference = reference.trim();
    let (scheme, host) = split_context(context_url)?;
    let page = strip_fragment(context_url);

    if reference.is_empty() {
        Ok(page.to_string())
    } else if reference.starts_with('#') {
        Ok(format!("{page}{reference}"))
    } else if reference.starts_with("//") {
        Ok(format!("{scheme}:{reference}"))
    } else if reference.starts_with('/') {
        Ok(format!(
            "{scheme}://{host}/{}",
            reference.trim_start_matches('/')
        ))
    } else if ABSOLUTE_PREFIXES.iter().any(|p| reference.starts_with(p)) {
        Ok(reference.to_string())
    } else {
        Err(Error::UnsupportedUrlKind {
            url: reference.to_string(),
        })
    }
}

/// `scheme://host` part of an absolute URL.
///
/// ```
/// use rs_whatif::url_utils::site_root;
///
/// assert_eq!(site_root("https://what-if.xkcd.com/10/")?, "https://what-if.xkcd.com");
/// # Ok::<(), rs_whatif::Error>(())
/// ```
pub fn site_root(context_url: &str) -> Result<String> {
    let (scheme, host) = split_context(context_url)?;
    Ok(format!("{scheme}://{host}"))
}

/// URL of the article with the given number, or of the newest article.
#[must_use]
pub fn article_url(number: Option<u32>) -> String {
    match number {
        Some(n) => format!("{SITE_URL}/{n}/"),
        None => SITE_URL.to_string(),
    }
}

/// Drop the `#fragment` part of a URL, if any.
#[must_use]
pub fn strip_fragment(url: &str) -> &str {
    url.split_once('#').map_or(url, |(page, _)| page)
}

/// Last non-empty path segment of a URL, without query or fragment.
///
/// ```
/// use rs_whatif::url_utils::last_path_segment;
///
/// assert_eq!(last_path_segment("https://what-if.xkcd.com/imgs/a/1/cow.png?v=2"), "cow.png");
/// assert_eq!(last_path_segment("https://what-if.xkcd.com/41/"), "41");
/// ```
#[must_use]
pub fn last_path_segment(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(segment) = parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
        {
            return segment.to_string();
        }
    }

    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    path.rsplit('/').next().unwrap_or_default().to_string()
}

/// Insert `_ru` before the extension of a file name.
///
/// ```
/// use rs_whatif::url_utils::localized_file_name;
///
/// assert_eq!(localized_file_name("cow.png"), "cow_ru.png");
/// assert_eq!(localized_file_name("archive.tar.gz"), "archive.tar_ru.gz");
/// assert_eq!(localized_file_name("noext"), "noext_ru");
/// ```
#[must_use]
pub fn localized_file_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((name, ext)) if !name.is_empty() => format!("{name}_ru.{ext}"),
        _ => format!("{file_name}_ru"),
    }
}

/// Split a context URL into its scheme and host.
///
/// The host is the text after the scheme separator (leading slashes
/// skipped) up to the next `/`, `?` or `#`.
fn split_context(context_url: &str) -> Result<(&str, &str)> {
    let Some((scheme, rest)) = context_url.split_once(':') else {
        return Err(Error::UnsupportedUrlKind {
            url: context_url.to_string(),
        });
    };
    let host = rest
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    Ok((scheme, host))
}
