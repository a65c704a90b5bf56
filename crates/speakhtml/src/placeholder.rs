//! Placeholder substitution for inline tagging tokens.
//!
//! Story bodies carry tokens such as `{{{keyword_tag:whale}}}`. They are
//! replaced with the bare term before the text is spoken.

use once_cell::sync::Lazy;
use regex::Regex;

static KEYWORD_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\{keyword_tag:([\w ]+)\}\}\}").unwrap());

static CONCEPT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\{concept_tag:([\w ]+)\}\}\}").unwrap());

/// Known placeholder prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `{{{keyword_tag:...}}}`
    Keyword,
    /// `{{{concept_tag:...}}}`
    Concept,
}

impl PlaceholderKind {
    /// Replace every token of this kind with its term
    pub fn strip(self, text: &str) -> String {
        let pattern = match self {
            PlaceholderKind::Keyword => &*KEYWORD_TAG,
            PlaceholderKind::Concept => &*CONCEPT_TAG,
        };
        pattern.replace_all(text, "$1").into_owned()
    }
}

/// Replace keyword and concept tokens with their plain terms
pub fn strip_placeholders(text: &str) -> String {
    let text = PlaceholderKind::Keyword.strip(text);
    PlaceholderKind::Concept.strip(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tag() {
        assert_eq!(strip_placeholders("{{{keyword_tag:whale}}}"), "whale");
    }

    #[test]
    fn test_concept_tag_with_spaces() {
        assert_eq!(
            strip_placeholders("the {{{concept_tag:deep sea}}} is dark"),
            "the deep sea is dark"
        );
    }

    #[test]
    fn test_passes_are_order_independent() {
        let text = "{{{concept_tag:coral}}} and {{{keyword_tag:reef}}}";
        let keyword_first = PlaceholderKind::Concept.strip(&PlaceholderKind::Keyword.strip(text));
        let concept_first = PlaceholderKind::Keyword.strip(&PlaceholderKind::Concept.strip(text));
        assert_eq!(keyword_first, "coral and reef");
        assert_eq!(keyword_first, concept_first);
    }

    #[test]
    fn test_unknown_prefix_untouched() {
        let text = "{{{person_tag:Ada}}} {{{keyword_tag:}}}";
        assert_eq!(strip_placeholders(text), text);
    }
}
