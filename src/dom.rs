//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: parsing, locating the fixed
//! landmarks of the article template, and reading tags, attributes and
//! serialized markup of single nodes.

pub use dom_query::{Document, NodeRef};

use dom_query::Selection;
use tendril::StrTendril;

use crate::error::{Error, Result};

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// First node matching a CSS selector, or [`Error::MissingElement`] naming
/// the selector.
pub fn require_first<'a>(doc: &'a Document, selector: &str) -> Result<NodeRef<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .copied()
        .ok_or_else(|| Error::MissingElement {
            selector: selector.to_string(),
        })
}

/// Closest ancestor (or the node itself) with the given tag name.
#[must_use]
pub fn closest<'a>(node: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    let mut current = Some(*node);
    while let Some(n) = current {
        if n.is_element() && tag_name(&n).as_deref() == Some(tag) {
            return Some(n);
        }
        current = n.parent();
    }
    None
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|v| v.to_string())
}

/// Check whether the `class` attribute contains the given class token.
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    attr(node, "class").is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

// === Serialization ===

/// Outer HTML of a node, without its tail text.
#[inline]
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}

/// Inner HTML of a node.
#[inline]
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

/// Text content of a node and all its descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_first_reports_selector() {
        let doc = parse("<html><body><p>no article</p></body></html>");
        let result = require_first(&doc, "body article");
        assert!(matches!(result, Err(Error::MissingElement { selector }) if selector == "body article"));
    }

    #[test]
    fn test_tag_and_attributes() {
        let doc = parse(r#"<p id="question" class="ref note">x</p>"#);
        let p = require_first(&doc, "p").ok();
        let p = p.as_ref();

        assert_eq!(p.and_then(tag_name).as_deref(), Some("p"));
        assert_eq!(p.and_then(|n| attr(n, "id")).as_deref(), Some("question"));
        assert!(p.is_some_and(|n| has_class(n, "ref")));
        assert!(p.is_some_and(|n| has_class(n, "note")));
        assert!(!p.is_some_and(|n| has_class(n, "refbody")));
    }

    #[test]
    fn test_closest_walks_up_to_anchor() {
        let doc = parse(r#"<nav><a href="/1/"><button class="prev">&lt;</button></a></nav>"#);
        let button = require_first(&doc, "button.prev").ok();
        let anchor = button.as_ref().and_then(|b| closest(b, "a"));
        assert_eq!(anchor.as_ref().and_then(|a| attr(a, "href")).as_deref(), Some("/1/"));
    }

    #[test]
    fn test_outer_html_has_no_tail() {
        let doc = parse("<p><code>x</code> tail</p>");
        let code = require_first(&doc, "code").ok();
        let html = code.as_ref().map(|c| outer_html(c).to_string());
        assert_eq!(html.as_deref(), Some("<code>x</code>"));
    }
}
