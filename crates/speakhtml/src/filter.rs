//! Node filters decide which subtrees are left out of the speech output.

use crate::node::NodeDescriptor;

/// Class carried by footnote lists in story bodies
pub const FOOTNOTE_LIST_CLASS: &str = "modern-footnotes-list";

/// Strategy deciding whether an element and its whole subtree are excluded.
///
/// Any `Fn(&NodeDescriptor) -> bool` closure is a filter, as is [`Filter`].
pub trait NodeFilter {
    /// `true` drops the node and everything below it
    fn excludes(&self, node: &NodeDescriptor<'_>) -> bool;
}

impl<F> NodeFilter for F
where
    F: Fn(&NodeDescriptor<'_>) -> bool,
{
    fn excludes(&self, node: &NodeDescriptor<'_>) -> bool {
        self(node)
    }
}

/// Filter that never excludes anything
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl NodeFilter for KeepAll {
    fn excludes(&self, _node: &NodeDescriptor<'_>) -> bool {
        false
    }
}

/// Declarative element matcher, used both as a node filter and to select
/// which elements a [`Rule`](crate::Rule) applies to.
pub enum Filter {
    /// Match a single tag name
    TagName(String),
    /// Match any of multiple tag names
    TagNames(Vec<String>),
    /// Match any element carrying a class
    Class(String),
    /// Match a tag only when it carries a class
    TagWithClass { tag: String, class: String },
    /// Match when any inner filter matches
    AnyOf(Vec<Filter>),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&NodeDescriptor<'_>) -> bool + Send + Sync>),
}

impl Filter {
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_lowercase())
    }

    pub fn tags(names: &[&str]) -> Self {
        Filter::TagNames(names.iter().map(|s| s.to_lowercase()).collect())
    }

    pub fn class(class: &str) -> Self {
        Filter::Class(class.to_string())
    }

    pub fn tag_with_class(tag: &str, class: &str) -> Self {
        Filter::TagWithClass {
            tag: tag.to_lowercase(),
            class: class.to_string(),
        }
    }

    pub fn any_of(filters: Vec<Filter>) -> Self {
        Filter::AnyOf(filters)
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&NodeDescriptor<'_>) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Footnote lists: `<ul class="modern-footnotes-list">`
    pub fn footnotes() -> Self {
        Self::tag_with_class("ul", FOOTNOTE_LIST_CLASS)
    }

    /// Check if this filter matches an element
    pub fn matches(&self, node: &NodeDescriptor<'_>) -> bool {
        let tag = node.tag_name();
        match self {
            Filter::TagName(t) => tag == t,
            Filter::TagNames(tags) => tags.iter().any(|t| t == tag),
            Filter::Class(class) => node.has_class(class),
            Filter::TagWithClass { tag: t, class } => tag == t && node.has_class(class),
            Filter::AnyOf(filters) => filters.iter().any(|f| f.matches(node)),
            Filter::Predicate(f) => f(node),
        }
    }
}

impl NodeFilter for Filter {
    fn excludes(&self, node: &NodeDescriptor<'_>) -> bool {
        self.matches(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footnote_list() -> NodeDescriptor<'static> {
        NodeDescriptor::new("ul", vec!["modern-footnotes-list"])
    }

    #[test]
    fn test_tag_filters() {
        let ul = NodeDescriptor::new("ul", vec![]);
        assert!(Filter::tag("UL").matches(&ul));
        assert!(Filter::tags(&["ol", "ul"]).matches(&ul));
        assert!(!Filter::tag("ol").matches(&ul));
    }

    #[test]
    fn test_footnotes_filter_requires_tag_and_class() {
        let filter = Filter::footnotes();
        assert!(filter.excludes(&footnote_list()));
        assert!(!filter.excludes(&NodeDescriptor::new("ul", vec![])));
        assert!(!filter.excludes(&NodeDescriptor::new("ol", vec!["modern-footnotes-list"])));
    }

    #[test]
    fn test_any_of_and_predicate() {
        let filter = Filter::any_of(vec![
            Filter::class("sidebar"),
            Filter::predicate(|node| node.tag_name() == "aside"),
        ]);
        assert!(filter.excludes(&NodeDescriptor::new("div", vec!["sidebar"])));
        assert!(filter.excludes(&NodeDescriptor::new("aside", vec![])));
        assert!(!filter.excludes(&NodeDescriptor::new("div", vec![])));
    }

    #[test]
    fn test_plain_functions_are_filters() {
        fn drop_lists(node: &NodeDescriptor<'_>) -> bool {
            node.tag_name() == "ul"
        }
        assert!(drop_lists.excludes(&footnote_list()));
        assert!(!KeepAll.excludes(&footnote_list()));
    }
}
