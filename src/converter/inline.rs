//! Inline content conversion.
//!
//! Walks an inline subtree (text, child elements, tails) and emits the
//! Markdown dialect. Emphasis and strong markers alternate with nesting
//! depth so that `<em>a<em>b</em>c</em>` becomes `*a_b_c*` rather than the
//! ambiguous `*a*b*c*`. The marker pair in force is passed down explicitly;
//! siblings never influence each other.

use dom_query::NodeRef;

use super::blocks;
use super::footnotes;
use super::state::ConversionState;
use super::tags::InlineTag;
use crate::dom;
use crate::error::Result;
use crate::etree;
use crate::text::normalize_space;
use crate::url_utils;

/// Separator between paragraphs (a blank line).
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Emphasis and strong delimiters in force at some nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub emphasis: &'static str,
    pub strong: &'static str,
}

impl Markers {
    /// Markers used at depth zero.
    pub const TOP_LEVEL: Self = Self {
        emphasis: "*",
        strong: "**",
    };

    /// Markers for the children of an `em` opened with `self.emphasis`.
    #[must_use]
    pub fn inside_emphasis(self) -> Self {
        Self {
            emphasis: if self.emphasis == "*" { "_" } else { "*" },
            ..self
        }
    }

    /// Markers for the children of a `strong` opened with `self.strong`.
    #[must_use]
    pub fn inside_strong(self) -> Self {
        Self {
            strong: if self.strong == "**" { "__" } else { "**" },
            ..self
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::TOP_LEVEL
    }
}

/// Convert the content of `node` (its text, its children and their tails).
///
/// `node` itself is not emitted; callers wrap the result as needed.
pub fn convert_inline(
    node: &NodeRef,
    state: &mut ConversionState,
    markers: Markers,
) -> Result<String> {
    let (text, children) = etree::split_children(node);
    let mut out = normalize_space(&text);

    for child in children {
        let element = &child.node;
        match InlineTag::classify(element) {
            InlineTag::Emphasis => {
                out.push_str(markers.emphasis);
                out.push_str(&convert_inline(element, state, markers.inside_emphasis())?);
                out.push_str(markers.emphasis);
            }
            InlineTag::Strong => {
                out.push_str(markers.strong);
                out.push_str(&convert_inline(element, state, markers.inside_strong())?);
                out.push_str(markers.strong);
            }
            InlineTag::Anchor => out.push_str(&convert_link(element, state)?),
            InlineTag::Footnote => out.push_str(&footnotes::collect_footnote(element, state)?),
            InlineTag::Superscript => {
                out.push_str("^{");
                out.push_str(&convert_inline(element, state, markers)?);
                out.push('}');
            }
            InlineTag::Subscript => {
                out.push_str("_{");
                out.push_str(&convert_inline(element, state, markers)?);
                out.push('}');
            }
            InlineTag::LineBreak => out.push_str(PARAGRAPH_SEPARATOR),
            InlineTag::Image => out.push_str(&blocks::convert_image(element, state)?),
            InlineTag::Paragraph => {
                out.push_str(convert_inline(element, state, markers)?.trim());
                out.push_str(PARAGRAPH_SEPARATOR);
            }
            InlineTag::Opaque => {
                // Raw markup: the tail stays raw as well.
                out.push_str(&dom::outer_html(element));
                out.push_str(&child.tail);
                continue;
            }
        }
        push_tail(&mut out, &child.tail);
    }

    Ok(out)
}

/// Emit `[text][n]` for a link and register its target in the reference
/// list.
pub fn convert_link(anchor: &NodeRef, state: &mut ConversionState) -> Result<String> {
    let text = normalize_space(&dom::text_content(anchor));
    let href = dom::attr(anchor, "href").unwrap_or_default();
    let target = url_utils::resolve(&href, &state.base_url)?;
    let ordinal = state.reference_ordinal(&target);
    Ok(format!("[{}][{ordinal}]", text.trim()))
}

fn push_tail(out: &mut String, tail: &str) {
    let tail = normalize_space(tail);
    if out.ends_with('\n') {
        out.push_str(tail.trim_start());
    } else {
        out.push_str(&tail);
    }
}
