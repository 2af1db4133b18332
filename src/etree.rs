//! Element Tree (etree) view with text/tail model support.
//!
//! The converter reads the DOM the lxml way, where elements have:
//! - **Text**: text content BEFORE the first child element
//! - **Tail**: text content AFTER the element's closing tag, up to the next
//!   sibling element
//!
//! ```html
//! <p>
//!   TEXT HERE          <!-- This is p's "text" -->
//!   <em>inner</em>
//!   TAIL HERE          <!-- This is em's "tail" -->
//! </p>
//! ```
//!
//! Comment nodes are skipped; text around them is joined.

use dom_query::NodeRef;

/// An element child of a node together with its tail text.
#[derive(Clone)]
pub struct ElementChild<'a> {
    pub node: NodeRef<'a>,
    pub tail: String,
}

/// Split the children of `node` into its leading text and its element
/// children with their tails, in document order.
#[must_use]
pub fn split_children<'a>(node: &NodeRef<'a>) -> (String, Vec<ElementChild<'a>>) {
    let mut text = String::new();
    let mut children: Vec<ElementChild<'a>> = Vec::new();

    let mut current = node.first_child();
    while let Some(child) = current {
        if child.is_element() {
            children.push(ElementChild {
                node: child,
                tail: String::new(),
            });
        } else if child.is_text() {
            let target = match children.last_mut() {
                Some(last) => &mut last.tail,
                None => &mut text,
            };
            target.push_str(&child.text());
        }
        current = child.next_sibling();
    }

    (text, children)
}

/// Text of `node` before its first element child.
#[must_use]
pub fn text(node: &NodeRef) -> String {
    split_children(node).0
}

/// Element children of `node`, without text.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    split_children(node)
        .1
        .into_iter()
        .map(|child| child.node)
        .collect()
}
