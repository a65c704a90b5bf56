//! Rule type mapping an HTML element to speech markup.

use crate::filter::Filter;
use crate::node::{Node, NodeDescriptor};
use crate::service::SpeechOptions;

/// Type alias for replacement functions: element, converted content, options
pub type ReplacementFn = Box<dyn Fn(&Node, &str, &SpeechOptions) -> String + Send + Sync>;

/// A rule defines how a matched HTML element is spoken
pub struct Rule {
    /// Filter to determine which elements this rule applies to
    pub filter: Filter,
    /// Replacement function that generates speech markup
    pub replacement: ReplacementFn,
}

impl Rule {
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&Node, &str, &SpeechOptions) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Box::new(replacement),
        }
    }

    pub fn for_tag<F>(tag: &str, replacement: F) -> Self
    where
        F: Fn(&Node, &str, &SpeechOptions) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tag(tag), replacement)
    }

    pub fn for_tags<F>(tags: &[&str], replacement: F) -> Self
    where
        F: Fn(&Node, &str, &SpeechOptions) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tags(tags), replacement)
    }

    pub fn matches(&self, node: &NodeDescriptor<'_>) -> bool {
        self.filter.matches(node)
    }

    /// Apply this rule's replacement
    pub fn replace(&self, node: &Node, content: &str, options: &SpeechOptions) -> String {
        (self.replacement)(node, content, options)
    }
}
