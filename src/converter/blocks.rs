//! Top-level block handlers.
//!
//! Each handler turns one direct child of `<article>` into one contiguous
//! chunk of output and flushes the footnotes collected while doing so.
//! The title block is the exception: it is built from the navigation
//! buttons and title heading outside the article container.

use dom_query::{Document, NodeRef};

use super::footnotes::flush_footnotes;
use super::inline::{convert_inline, Markers, PARAGRAPH_SEPARATOR};
use super::state::ConversionState;
use crate::dom;
use crate::error::{Error, Result};
use crate::etree;
use crate::text::{display_formula, escape_quotes, normalize_space, slugify};
use crate::url_utils::{self, last_path_segment, localized_file_name, strip_fragment};

/// Button leading to the previous article.
pub const PREV_BUTTON_SELECTOR: &str = "nav.main-nav button.prev";

/// Heading holding the article title.
pub const TITLE_SELECTOR: &str = "h2#title";

/// Identity of the article, read from the page around the article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    pub number: u32,
    pub url: String,
    pub title: String,
    pub slug: String,
}

/// Read the article number, URL, title and slug; record number and slug in
/// `state` and return the info together with the `title\nurl\n\n` block.
pub fn convert_title(doc: &Document, state: &mut ConversionState) -> Result<(TitleInfo, String)> {
    let number = article_number(doc, &state.base_url)?;
    let url = format!("{}/{number}", url_utils::site_root(&state.base_url)?);

    let heading = dom::require_first(doc, TITLE_SELECTOR)?;
    let title = normalize_space(&dom::text_content(&heading)).trim().to_string();
    let slug = slugify(number, &title);

    state.article_number = number;
    state.slug.clone_from(&slug);

    let block = format!("{title}\n{url}{PARAGRAPH_SEPARATOR}");
    Ok((
        TitleInfo {
            number,
            url,
            title,
            slug,
        },
        block,
    ))
}

/// Number of the current article: one more than the previous article's,
/// or 1 when the "previous" button points back at the page itself.
fn article_number(doc: &Document, base_url: &str) -> Result<u32> {
    let button = dom::require_first(doc, PREV_BUTTON_SELECTOR)?;
    let anchor = dom::closest(&button, "a").ok_or_else(|| Error::MissingElement {
        selector: format!("a > {PREV_BUTTON_SELECTOR}"),
    })?;
    let href = dom::attr(&anchor, "href").unwrap_or_default();
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return Ok(1);
    }

    let previous = url_utils::resolve(href, base_url)?;
    if same_page(&previous, base_url) {
        return Ok(1);
    }

    let segment = last_path_segment(&previous);
    let previous_number: u32 = segment.parse().map_err(|_| {
        Error::UnexpectedTemplate(format!(
            "previous article link {previous} does not end with an article number"
        ))
    })?;
    previous_number.checked_add(1).ok_or_else(|| {
        Error::UnexpectedTemplate(format!(
            "previous article number {previous_number} has no successor"
        ))
    })
}

fn same_page(a: &str, b: &str) -> bool {
    strip_fragment(a).trim_end_matches('/') == strip_fragment(b).trim_end_matches('/')
}

/// Convert a top-level paragraph.
///
/// `id="question"` and `id="attribute"` paragraphs are quoted. A paragraph
/// whose leading text is a display formula is emitted as `$$ ... $$`
/// without looking at its children.
pub fn convert_paragraph(p: &NodeRef, state: &mut ConversionState) -> Result<String> {
    let id = dom::attr(p, "id");
    let is_question = id.as_deref() == Some("question");
    let is_attribute = id.as_deref() == Some("attribute");

    let mut out = String::new();
    if is_question || is_attribute {
        out.push_str("> ");
    }

    match display_formula(&etree::text(p)) {
        Some(formula) => out.push_str(&formula),
        None => out.push_str(convert_inline(p, state, Markers::TOP_LEVEL)?.trim()),
    }

    if is_question {
        out.push_str("\n>\n");
    } else {
        out.push_str(PARAGRAPH_SEPARATOR);
    }
    out.push_str(&flush_footnotes(state));
    Ok(out)
}

/// Convert a top-level blockquote: every output line, blank ones included,
/// starts with `> `. Footnotes follow the whole quote.
pub fn convert_blockquote(quote: &NodeRef, state: &mut ConversionState) -> Result<String> {
    let body = convert_inline(quote, state, Markers::TOP_LEVEL)?;
    let quoted: Vec<String> = body.trim().split('\n').map(|line| format!("> {line}")).collect();

    let mut out = quoted.join("\n");
    out.push_str(PARAGRAPH_SEPARATOR);
    out.push_str(&flush_footnotes(state));
    Ok(out)
}

/// Convert an image, at top level or inside inline content.
///
/// The image reference points at the localized copy (`name_ru.ext`) under
/// the article's upload directory; the `render:` line keeps the original.
pub fn convert_image(img: &NodeRef, state: &mut ConversionState) -> Result<String> {
    let src = dom::attr(img, "src").unwrap_or_default();
    let url = url_utils::resolve(&src, &state.base_url)?;
    let path = format!(
        "/uploads/{}/{}",
        state.slug,
        localized_file_name(&last_path_segment(&url))
    );
    let title = escape_quotes(&dom::attr(img, "title").unwrap_or_default());

    let reference = if title.is_empty() {
        format!("![]({path})")
    } else {
        format!("![]({path} \"{title}\")")
    };
    Ok(format!(
        "{reference}\n[labels]\nTODO\n[/labels]\nrender: ![]({url}){PARAGRAPH_SEPARATOR}"
    ))
}
