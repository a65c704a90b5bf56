//! SpeechService - the main entry point for HTML to speech markup conversion.

use tracing::trace;

use crate::filter::{Filter, NodeFilter};
use crate::node::{Node, NodeType};
use crate::placeholder::strip_placeholders;
use crate::rules::{Rule, Rules};
use crate::truncate::{SelfClosingPolicy, TruncateOptions};
use crate::utilities::{collapse_markup_whitespace, collapse_whitespace, escape_xml};

/// Pause strengths understood by `<break strength="...">`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakStrength {
    None,
    XWeak,
    Weak,
    #[default]
    Medium,
    Strong,
    XStrong,
}

impl BreakStrength {
    /// Attribute value for `strength`
    pub fn as_str(self) -> &'static str {
        match self {
            BreakStrength::None => "none",
            BreakStrength::XWeak => "x-weak",
            BreakStrength::Weak => "weak",
            BreakStrength::Medium => "medium",
            BreakStrength::Strong => "strong",
            BreakStrength::XStrong => "x-strong",
        }
    }
}

/// Levels understood by `<emphasis level="...">`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmphasisLevel {
    Reduced,
    #[default]
    Moderate,
    Strong,
}

impl EmphasisLevel {
    /// Attribute value for `level`
    pub fn as_str(self) -> &'static str {
        match self {
            EmphasisLevel::Reduced => "reduced",
            EmphasisLevel::Moderate => "moderate",
            EmphasisLevel::Strong => "strong",
        }
    }
}

/// Options for SpeechService
#[derive(Debug, Clone)]
pub struct SpeechOptions {
    /// Pause spoken for `<br>`
    pub line_break: BreakStrength,

    /// Pause spoken for `<hr>`
    pub thematic_break: BreakStrength,

    /// Emphasis for headings
    pub heading_emphasis: EmphasisLevel,

    /// Emphasis for `<strong>` and `<b>`
    pub strong_emphasis: EmphasisLevel,

    /// Emphasis for `<em>` and `<i>`
    pub em_emphasis: EmphasisLevel,

    /// Escape `&`, `<` and `>` in text. When off, text is emitted verbatim
    /// and may break tag balance.
    pub escape_text: bool,

    /// Replace `{{{keyword_tag:...}}}` and `{{{concept_tag:...}}}` tokens
    pub strip_placeholders: bool,

    /// Options used by [`SpeechService::render`] when the output is over
    /// budget. Self-closing markers are skipped by default, since the
    /// converter writes `<break/>` and `<audio/>` itself.
    pub truncate: TruncateOptions,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            line_break: BreakStrength::Medium,
            thematic_break: BreakStrength::XStrong,
            heading_emphasis: EmphasisLevel::Strong,
            strong_emphasis: EmphasisLevel::Strong,
            em_emphasis: EmphasisLevel::Moderate,
            escape_text: true,
            strip_placeholders: true,
            truncate: TruncateOptions {
                self_closing: SelfClosingPolicy::Skip,
                ..Default::default()
            },
        }
    }
}

/// The main service for converting HTML to speech markup
pub struct SpeechService {
    options: SpeechOptions,
    rules: Rules,
}

impl SpeechService {
    /// Create a new SpeechService with default options
    pub fn new() -> Self {
        Self {
            options: SpeechOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a SpeechService with custom options
    pub fn with_options(options: SpeechOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Convert an HTML fragment to speech markup.
    ///
    /// Elements for which `filter` returns `true` are dropped together with
    /// their subtree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use speakhtml::{Filter, SpeechService};
    ///
    /// let service = SpeechService::new();
    /// let html = r#"<p>Whales sing.</p><ul class="modern-footnotes-list"><li>1. Source</li></ul>"#;
    /// assert_eq!(service.convert(html, &Filter::footnotes()), "<p>Whales sing.</p>");
    /// ```
    #[cfg(feature = "html")]
    pub fn convert(&self, html: &str, filter: &dyn NodeFilter) -> String {
        let root = crate::html::parse_html(html);
        self.convert_node(&root, filter)
    }

    /// Convert the children of `root` to speech markup. `root` is the
    /// container and is never filtered or mapped itself.
    pub fn convert_node(&self, root: &Node, filter: &dyn NodeFilter) -> String {
        let result = self.process_children(root, filter);
        self.post_process(&result)
    }

    /// Convert an HTML fragment and truncate the result when it is longer
    /// than `budget` characters.
    #[cfg(feature = "html")]
    pub fn render(&self, html: &str, filter: &dyn NodeFilter, budget: usize) -> String {
        let speech = self.convert(html, filter);
        if speech.chars().count() > budget {
            crate::truncate::truncate_with(&speech, budget, &self.options.truncate)
        } else {
            speech
        }
    }

    /// Add a custom rule
    pub fn add_rule(&mut self, key: &str, rule: Rule) -> &mut Self {
        self.rules.add(key, rule);
        self
    }

    /// Remove elements matching the filter on every conversion
    pub fn remove(&mut self, filter: Filter) -> &mut Self {
        self.rules.remove(filter);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &SpeechOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut SpeechOptions {
        &mut self.options
    }

    /// Process children of an element
    fn process_children(&self, element: &Node, filter: &dyn NodeFilter) -> String {
        let mut result = String::new();

        for child in element.children() {
            match child.node_type {
                NodeType::Text => {
                    let text = collapse_whitespace(child.node_value.as_deref().unwrap_or_default());
                    if self.options.escape_text {
                        result.push_str(&escape_xml(&text));
                    } else {
                        result.push_str(&text);
                    }
                }
                NodeType::Element => {
                    result.push_str(&self.process_element(child, filter));
                }
            }
        }

        result
    }

    /// Process a single element
    fn process_element(&self, element: &Node, filter: &dyn NodeFilter) -> String {
        let descriptor = element.descriptor();

        if filter.excludes(&descriptor) {
            trace!(tag = descriptor.tag_name(), classes = ?descriptor.classes(), "node filter excluded subtree");
            return String::new();
        }

        if self.rules.should_remove(&descriptor) {
            return String::new();
        }

        let content = self.process_children(element, filter);

        match self.rules.for_node(&descriptor) {
            Some(rule) => rule.replace(element, &content, &self.options),
            None => content,
        }
    }

    /// Post-process the result
    fn post_process(&self, output: &str) -> String {
        let result = collapse_markup_whitespace(output).trim().to_string();

        if self.options.strip_placeholders {
            strip_placeholders(&result)
        } else {
            result
        }
    }
}

impl Default for SpeechService {
    fn default() -> Self {
        Self::new()
    }
}
