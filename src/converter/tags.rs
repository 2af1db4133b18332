//! Element kinds understood by the converter.
//!
//! Tag names are mapped once to these enums and every handler dispatches
//! with an exhaustive `match`; anything unknown becomes an explicit
//! passthrough or skip variant.

use dom_query::NodeRef;

use crate::dom;

/// Class marking a footnote span.
pub const FOOTNOTE_CLASS: &str = "ref";

/// Class of the footnote body inside a footnote span.
pub const FOOTNOTE_BODY_CLASS: &str = "refbody";

/// Kinds of elements met inside inline content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineTag {
    /// `em`
    Emphasis,
    /// `strong`, `b`
    Strong,
    /// `a`
    Anchor,
    /// `span class="ref"`
    Footnote,
    /// `sup`
    Superscript,
    /// `sub`
    Subscript,
    /// `br`
    LineBreak,
    /// `img`
    Image,
    /// `p` nested in a blockquote or footnote body
    Paragraph,
    /// Any other element, including spans that are not footnotes; copied
    /// verbatim.
    Opaque,
}

impl InlineTag {
    #[must_use]
    pub fn classify(node: &NodeRef) -> Self {
        match dom::tag_name(node).as_deref() {
            Some("em") => Self::Emphasis,
            Some("strong" | "b") => Self::Strong,
            Some("a") => Self::Anchor,
            Some("span") if dom::has_class(node, FOOTNOTE_CLASS) => Self::Footnote,
            Some("sup") => Self::Superscript,
            Some("sub") => Self::Subscript,
            Some("br") => Self::LineBreak,
            Some("img") => Self::Image,
            Some("p") => Self::Paragraph,
            _ => Self::Opaque,
        }
    }
}

/// Kinds of direct children of the article container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockTag {
    /// `p`
    Paragraph,
    /// `blockquote`
    Blockquote,
    /// `img`
    Image,
    /// Anything else; skipped with a warning.
    Unrecognized(String),
}

impl BlockTag {
    #[must_use]
    pub fn classify(node: &NodeRef) -> Self {
        let tag = dom::tag_name(node).unwrap_or_default();
        match tag.as_str() {
            "p" => Self::Paragraph,
            "blockquote" => Self::Blockquote,
            "img" => Self::Image,
            _ => Self::Unrecognized(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;
    use crate::etree::element_children;

    fn classify_children(html: &str) -> Vec<InlineTag> {
        let doc = parse(html);
        let p = doc.select("p").nodes().first().copied();
        p.map(|p| element_children(&p).iter().map(InlineTag::classify).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_inline_classification() {
        let tags = classify_children(
            r#"<p><em>a</em><strong>b</strong><b>c</b><a href="/">d</a><span class="ref">e</span><span>f</span><sup>g</sup><sub>h</sub><br><img src="/x.png"><code>i</code></p>"#,
        );
        assert_eq!(
            tags,
            vec![
                InlineTag::Emphasis,
                InlineTag::Strong,
                InlineTag::Strong,
                InlineTag::Anchor,
                InlineTag::Footnote,
                InlineTag::Opaque,
                InlineTag::Superscript,
                InlineTag::Subscript,
                InlineTag::LineBreak,
                InlineTag::Image,
                InlineTag::Opaque,
            ]
        );
    }

    #[test]
    fn test_block_classification() {
        let doc = parse("<article><p>a</p><blockquote>b</blockquote><img src='/x.png'><div>c</div></article>");
        let article = doc.select("article").nodes().first().copied();
        let tags: Vec<BlockTag> = article
            .map(|a| element_children(&a).iter().map(BlockTag::classify).collect())
            .unwrap_or_default();
        assert_eq!(
            tags,
            vec![
                BlockTag::Paragraph,
                BlockTag::Blockquote,
                BlockTag::Image,
                BlockTag::Unrecognized("div".to_string()),
            ]
        );
    }
}
