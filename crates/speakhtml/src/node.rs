//! Owned DOM node structure walked by the speech converter.
//!
//! Any parser can produce this tree. With the `html` feature enabled,
//! [`parse_html`](crate::parse_html) builds it from an HTML string.

/// Node kinds kept in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node
    Element,
    /// Text node
    Text,
}

/// A DOM node: either an element with attributes and children, or a run of text.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node type
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text` for text nodes
    pub node_name: String,

    /// Text content for text nodes
    pub node_value: Option<String>,

    /// Attributes in document order
    pub attributes: Vec<(String, String)>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_lowercase(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> &str {
        &self.node_name
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Classes listed in the `class` attribute
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class")
            .into_iter()
            .flat_map(|value| value.split_ascii_whitespace())
    }


    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Append a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Get all text content from this node and descendants
    #[cfg(test)]
    pub(crate) fn text_content(&self) -> String {
        match self.node_type {
            NodeType::Text => self.node_value.clone().unwrap_or_default(),
            NodeType::Element => self.children().map(|child| child.text_content()).collect(),
        }
    }

    /// Describe this node for a [`NodeFilter`](crate::NodeFilter)
    pub fn descriptor(&self) -> NodeDescriptor<'_> {
        NodeDescriptor {
            tag: self.tag_name(),
            classes: self.classes().collect(),
        }
    }
}

/// Lightweight view of an element: its tag name and class list.
///
/// Filters and rules only ever see this shape, so the tree walk does not
/// change when a new filter is plugged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescriptor<'a> {
    tag: &'a str,
    classes: Vec<&'a str>,
}

impl<'a> NodeDescriptor<'a> {
    /// Create a descriptor for a node built outside this crate
    pub fn new(tag: &'a str, classes: Vec<&'a str>) -> Self {
        Self { tag, classes }
    }

    /// Lowercase tag name
    pub fn tag_name(&self) -> &'a str {
        self.tag
    }

    /// Classes in attribute order
    pub fn classes(&self) -> &[&'a str] {
        &self.classes
    }

    /// Check if the class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs("audio", vec![("SRC", "a.mp3")]);
        assert_eq!(node.attr("src"), Some("a.mp3"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_classes() {
        let node = Node::element_with_attrs("ul", vec![("class", "  list modern-footnotes-list ")]);
        assert_eq!(node.classes().collect::<Vec<_>>(), vec!["list", "modern-footnotes-list"]);
        assert!(node.descriptor().has_class("modern-footnotes-list"));
        assert!(!node.descriptor().has_class("modern"));
    }

    #[test]
    fn test_descriptor() {
        let node = Node::element_with_attrs("UL", vec![("class", "a b")]);
        let descriptor = node.descriptor();
        assert_eq!(descriptor.tag_name(), "ul");
        assert_eq!(descriptor.classes(), &["a", "b"]);
        assert!(descriptor.has_class("b"));
    }

    #[test]
    fn test_text_content() {
        let mut div = Node::element("div");
        div.add_child(Node::text("Hello "));
        let mut span = Node::element("span");
        span.add_child(Node::text("World"));
        div.add_child(span);

        assert_eq!(div.text_content(), "Hello World");
        assert_eq!(div.element_children().count(), 1);
    }
}
