//! Rule system for HTML to speech markup conversion.

mod rule;
mod ssml;

pub use rule::{ReplacementFn, Rule};
pub use ssml::ssml_rules;

use indexmap::IndexMap;

use crate::filter::Filter;
use crate::node::NodeDescriptor;
use crate::utilities::is_skipped;

/// Collection of rules for conversion
pub struct Rules {
    /// Custom rules added by the user (checked first, in insertion order)
    custom_rules: IndexMap<String, Rule>,
    /// Remove rules (drop the element and its subtree)
    remove_rules: Vec<Filter>,
    /// Built-in SSML rules
    ssml_rules: Vec<Rule>,
}

impl Rules {
    /// Create a new Rules instance with the SSML rules
    pub fn new() -> Self {
        Self {
            custom_rules: IndexMap::new(),
            remove_rules: Vec::new(),
            ssml_rules: ssml_rules(),
        }
    }

    /// Add a custom rule, replacing any rule registered under the same key
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.custom_rules.insert(key.to_string(), rule);
    }

    /// Add a remove filter
    pub fn remove(&mut self, filter: Filter) {
        self.remove_rules.push(filter);
    }

    /// Find the rule for an element: custom rules first, then SSML rules
    pub fn for_node(&self, node: &NodeDescriptor<'_>) -> Option<&Rule> {
        self.custom_rules
            .values()
            .chain(self.ssml_rules.iter())
            .find(|rule| rule.matches(node))
    }

    /// Check if an element is dropped together with its subtree.
    ///
    /// Custom rules win over both the built-in skip list and remove filters.
    pub fn should_remove(&self, node: &NodeDescriptor<'_>) -> bool {
        if self.custom_rules.values().any(|rule| rule.matches(node)) {
            return false;
        }
        is_skipped(node.tag_name()) || self.remove_rules.iter().any(|f| f.matches(node))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
