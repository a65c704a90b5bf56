//! HTML parsing support.
//!
//! Parses HTML fragments with scraper (html5ever) and converts them to the
//! [`Node`] tree walked by the speech converter. The parser repairs broken
//! nesting, which is what keeps the converter output balanced.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML fragment into a Node tree.
///
/// Every top-level node of the fragment ends up under a synthetic root
/// container element (`html`), so callers may pass any number of siblings.
///
/// # Example
///
/// ```rust
/// use speakhtml::parse_html;
///
/// let root = parse_html("<p>One</p><p>Two</p>");
/// assert_eq!(root.tag_name(), "html");
/// assert_eq!(root.element_children().count(), 2);
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = Node::element_with_attrs(tag, attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
