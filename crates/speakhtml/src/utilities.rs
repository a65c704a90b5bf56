//! Utility functions and constants for HTML and speech markup processing.

/// Elements dropped together with their subtree: they carry no speakable text
pub const SKIPPED_ELEMENTS: &[&str] = &[
    "button", "canvas", "form", "head", "iframe", "img", "input", "noscript",
    "object", "picture", "script", "select", "style", "svg", "template",
    "textarea", "title", "video",
];

/// Block containers whose content is spoken as-is, separated from neighbours
pub const BLOCK_CONTAINERS: &[&str] = &[
    "article", "aside", "blockquote", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "header", "main", "nav", "pre", "section", "table",
    "td", "th", "tr",
];

/// Check if an element is dropped from speech output
pub fn is_skipped(tag: &str) -> bool {
    SKIPPED_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Collapse runs of whitespace into a single space
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Collapse whitespace runs in speech markup, leaving the inside of tags
/// (attribute values included) untouched
pub fn collapse_markup_whitespace(markup: &str) -> String {
    let mut result = String::with_capacity(markup.len());
    let mut in_tag = false;
    let mut prev_was_whitespace = false;

    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ => {}
        }
        if !in_tag && c.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Escape text so it cannot open or break a speech markup tag
pub fn escape_xml(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}

/// Escape an attribute value for a double-quoted speech markup attribute
pub fn escape_attr(value: &str) -> String {
    escape_xml(value).replace('"', "&quot;")
}

/// Wrap block content in a tag, padded so neighbouring blocks stay apart.
/// Blank content produces nothing.
pub fn wrap_block(tag: &str, attrs: &str, content: &str) -> String {
    let content = content.trim();
    if content.is_empty() {
        return String::new();
    }
    format!(" <{tag}{attrs}>{content}</{tag}> ")
}

/// Wrap inline content in a tag, keeping surrounding whitespace outside it.
/// Blank content is returned unchanged.
pub fn wrap_inline(tag: &str, attrs: &str, content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return content.to_string();
    }
    let leading = &content[..content.len() - content.trim_start().len()];
    let trailing = &content[content.trim_end().len()..];
    format!("{leading}<{tag}{attrs}>{trimmed}</{tag}>{trailing}")
}

/// A void speech marker such as `<break strength="strong"/>`
pub fn marker(tag: &str, attrs: &str) -> String {
    format!("<{tag}{attrs}/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a \n\t b"), "a b");
        assert_eq!(collapse_whitespace("\u{a0}x"), " x");
    }

    #[test]
    fn test_collapse_markup_whitespace() {
        assert_eq!(
            collapse_markup_whitespace(r#" <p>a</p>   <audio src="x  y.mp3"/>  b "#),
            r#" <p>a</p> <audio src="x  y.mp3"/> b "#
        );
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_wrap_block() {
        assert_eq!(wrap_block("p", "", "  Hello "), " <p>Hello</p> ");
        assert_eq!(wrap_block("p", "", " \n "), "");
    }

    #[test]
    fn test_wrap_inline_keeps_spacing() {
        assert_eq!(
            wrap_inline("emphasis", r#" level="strong""#, " bold "),
            r#" <emphasis level="strong">bold</emphasis> "#
        );
        assert_eq!(wrap_inline("emphasis", "", "  "), "  ");
    }

    #[test]
    fn test_element_lists() {
        assert!(is_skipped("SCRIPT"));
        assert!(!is_skipped("p"));
        assert_eq!(marker("break", r#" time="1s""#), r#"<break time="1s"/>"#);
    }
}
