//! Footnote collection and flushing.
//!
//! A footnote is a `<span class="ref">` wrapping a `<span class="refbody">`.
//! Its body is converted on the spot, queued in the conversion state and
//! written out after the enclosing top-level block.

use dom_query::NodeRef;

use super::inline::{convert_inline, Markers, PARAGRAPH_SEPARATOR};
use super::state::{ConversionState, Footnote};
use super::tags::FOOTNOTE_BODY_CLASS;
use crate::dom;
use crate::error::{Error, Result};
use crate::etree;
use crate::options::{INDENT_SPACES, INDENT_WORKAROUND_TOKEN};

/// Convert a footnote span: queue its body and return the `[^n]` marker.
pub fn collect_footnote(span: &NodeRef, state: &mut ConversionState) -> Result<String> {
    let body = etree::element_children(span)
        .into_iter()
        .find(|child| {
            dom::tag_name(child).as_deref() == Some("span") && dom::has_class(child, FOOTNOTE_BODY_CLASS)
        })
        .ok_or_else(|| Error::MissingElement {
            selector: "span.ref > span.refbody".to_string(),
        })?;

    let ordinal = state.next_footnote_ordinal();
    let converted = convert_inline(&body, state, Markers::TOP_LEVEL)?;
    state.push_footnote(build_footnote(ordinal, converted.trim(), state.indent));

    Ok(format!("[^{ordinal}]"))
}

/// Build a footnote from its converted body.
///
/// A body containing a paragraph separator is multi-paragraph: every line
/// of every paragraph is prefixed with `indent`.
#[must_use]
pub fn build_footnote(ordinal: u32, body: &str, indent: &str) -> Footnote {
    let is_multi_paragraph = body.contains(PARAGRAPH_SEPARATOR);
    let body = if is_multi_paragraph {
        indent_paragraphs(body, indent)
    } else {
        body.to_string()
    };
    Footnote {
        ordinal,
        body,
        is_multi_paragraph,
    }
}

/// Write out and clear the pending footnotes.
pub fn flush_footnotes(state: &mut ConversionState) -> String {
    let reminder = state.indent == INDENT_WORKAROUND_TOKEN;
    let mut out = String::new();

    for footnote in state.take_footnotes() {
        if footnote.is_multi_paragraph {
            if reminder {
                out.push_str(&format!(
                    "TODO: replace '{INDENT_WORKAROUND_TOKEN}' with '{INDENT_SPACES}'\n"
                ));
            }
            out.push_str(&format!("[^{}]:\n{}", footnote.ordinal, footnote.body));
        } else {
            out.push_str(&format!("[^{}]: {}", footnote.ordinal, footnote.body));
        }
        out.push_str(PARAGRAPH_SEPARATOR);
    }

    out
}

fn indent_paragraphs(body: &str, indent: &str) -> String {
    body.split(PARAGRAPH_SEPARATOR)
        .map(|paragraph| {
            let indented: Vec<String> = paragraph
                .split('\n')
                .map(|line| format!("{indent}{line}"))
                .collect();
            indented.join("\n").trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}
