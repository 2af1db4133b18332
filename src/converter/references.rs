//! Reference list resolution.
//!
//! Links are collected during conversion; at the end of the document each
//! distinct target is written as `[n]: url "title"`, the title being read
//! from the target page. A failed lookup only degrades the title.

use super::inline::PARAGRAPH_SEPARATOR;
use super::state::{ConversionState, Reference};
use crate::dom;
use crate::error::Warning;
use crate::fetch::Fetcher;
use crate::text::{collapse_title_lines, escape_quotes};
use crate::Options;

/// Write out the reference list collected in `state`.
pub fn resolve_references(
    state: &mut ConversionState,
    options: &Options,
    fetcher: &dyn Fetcher,
) -> String {
    let references = state.references().to_vec();
    let total = references.len();
    let mut out = String::new();

    for reference in &references {
        let title = if options.skip_reference_title_lookup {
            options.title_placeholder.clone()
        } else {
            lookup_title(reference, total, state, options, fetcher)
        };
        out.push_str(&format!(
            "[{}]: {} \"{}\"",
            reference.ordinal,
            reference.target_url,
            escape_quotes(&title)
        ));
        out.push_str(PARAGRAPH_SEPARATOR);
    }

    out
}

fn lookup_title(
    reference: &Reference,
    total: usize,
    state: &mut ConversionState,
    options: &Options,
    fetcher: &dyn Fetcher,
) -> String {
    log::info!(
        "[get_title {}/{total}] Download page from {}",
        reference.ordinal,
        reference.target_url
    );
    match fetcher.fetch_html(&reference.target_url) {
        Ok(page) => page_title(&page.text()).unwrap_or_else(|| {
            log::info!("No <title> in {}", reference.target_url);
            options.title_placeholder.clone()
        }),
        Err(err) => {
            state.warn(Warning::TitleLookupFailed {
                url: reference.target_url.clone(),
                reason: err.to_string(),
            });
            options.title_placeholder.clone()
        }
    }
}

/// Display title of an HTML page: its first `<title>`, lines trimmed and
/// joined with spaces. `None` when absent or blank.
#[must_use]
pub fn page_title(html: &str) -> Option<String> {
    let doc = dom::parse(html);
    let title = doc
        .select("title")
        .nodes()
        .first()
        .map(|node| collapse_title_lines(&dom::text_content(node)))?;
    (!title.is_empty()).then_some(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{MapFetcher, Page};

    fn state_with(urls: &[&str]) -> ConversionState {
        let mut state = ConversionState::new("https://what-if.xkcd.com/5/", &Options::default());
        for url in urls {
            state.reference_ordinal(url);
        }
        state
    }

    #[test]
    fn test_page_title_collapses_lines() {
        let html = "<html><head><title>\n  Drop \n\n  Height\n</title></head></html>";
        assert_eq!(page_title(html).as_deref(), Some("Drop Height"));
        assert_eq!(page_title("<html><body>none</body></html>"), None);
        assert_eq!(page_title("<title>   </title>"), None);
    }

    #[test]
    fn test_references_with_fetched_titles() {
        let fetcher = MapFetcher::new()
            .with_page("http://a.example/", Page::html("<title>The \"A\" page</title>"))
            .with_page("http://b.example/", Page::html("<p>untitled</p>"));
        let mut state = state_with(&["http://a.example/", "http://b.example/"]);

        let out = resolve_references(&mut state, &Options::default(), &fetcher);
        assert_eq!(
            out,
            "[1]: http://a.example/ \"The \\\"A\\\" page\"\n\n[2]: http://b.example/ \"TODO\"\n\n"
        );
        assert!(state.take_warnings().is_empty());
    }

    #[test]
    fn test_failed_lookup_degrades_to_placeholder() {
        let mut state = state_with(&["http://gone.example/"]);
        let out = resolve_references(&mut state, &Options::default(), &MapFetcher::new());
        assert_eq!(out, "[1]: http://gone.example/ \"TODO\"\n\n");

        let warnings = state.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            Warning::TitleLookupFailed { url, .. } if url == "http://gone.example/"
        ));
    }

    #[test]
    fn test_skip_lookup_uses_placeholder_without_fetching() {
        let fetcher = MapFetcher::new().with_page("http://a.example/", Page::html("<title>A</title>"));
        let options = Options {
            skip_reference_title_lookup: true,
            title_placeholder: "?".to_string(),
            ..Options::default()
        };
        let mut state = state_with(&["http://a.example/"]);
        assert_eq!(
            resolve_references(&mut state, &options, &fetcher),
            "[1]: http://a.example/ \"?\"\n\n"
        );
        assert!(state.take_warnings().is_empty());
    }
}
