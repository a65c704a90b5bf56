//! Tag-safe truncation of speech markup.
//!
//! The cut is approximate: the budget counts characters of the raw string,
//! tags included, and the closing tags appended afterwards are not counted.
//! Whatever tags the cut leaves open are closed in reverse order, so input
//! with balanced tags yields output with balanced tags.
//!
//! Tags are classified with a plain pattern match: anything that looks like
//! `<name...>` opens, any other complete tag closes the most recent open tag.
//! Names are not compared, so the input is trusted to be well nested.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Appended to every truncated string
pub const TERMINATOR: &str = ".";

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static OPENING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<\w[^>]*>$").unwrap());

static TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

static PARTIAL_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*$").unwrap());

static PARTIAL_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[#\w]*$").unwrap());

/// How tags written in self-closing form (`<break/>`) are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfClosingPolicy {
    /// Self-closing tags match the opening pattern and receive a synthetic
    /// closing tag when they are still "open" at the cut. A later closing
    /// tag pops them instead of the element it belongs to. Only applies to
    /// strings that are actually cut. Default of the free [`truncate`].
    #[default]
    TreatAsOpen,
    /// Tags ending in `/>` are neither pushed nor popped
    Skip,
}

/// Options for [`truncate_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Marker appended after the closing tags
    pub terminator: String,

    /// Treatment of self-closing tags
    pub self_closing: SelfClosingPolicy,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            terminator: TERMINATOR.to_string(),
            self_closing: SelfClosingPolicy::TreatAsOpen,
        }
    }
}

/// Truncate speech markup to roughly `approx_limit` characters with default options.
///
/// # Example
///
/// ```rust
/// use speakhtml::truncate;
///
/// let cut = truncate("<p>Hello <b>world</b></p> extra text here", 20);
/// assert_eq!(cut, "<p>Hello <b>world</b></p>.");
/// ```
pub fn truncate(s: &str, approx_limit: usize) -> String {
    truncate_with(s, approx_limit, &TruncateOptions::default())
}

/// Truncate speech markup to roughly `approx_limit` characters, closing
/// every tag the cut leaves open and appending the terminator.
///
/// A string that fits the budget is returned as-is with the terminator.
pub fn truncate_with(s: &str, approx_limit: usize, options: &TruncateOptions) -> String {
    let Some((end, _)) = s.char_indices().nth(approx_limit) else {
        debug!(approx_limit, cut = false, "truncated speech markup");
        return format!("{s}{}", options.terminator);
    };

    let mut prefix = &s[..end];
    if let Some(partial) = PARTIAL_TAG.find(prefix) {
        prefix = &prefix[..partial.start()];
    }
    if let Some(partial) = PARTIAL_ENTITY.find(prefix) {
        prefix = &prefix[..partial.start()];
    }

    let open_tags = unclosed_tags(prefix, options.self_closing);

    let mut result = String::with_capacity(prefix.len() + open_tags.len() * 8 + options.terminator.len());
    result.push_str(prefix);
    for tag in open_tags.iter().rev() {
        if let Some(name) = TAG_NAME.find(tag) {
            result.push_str("</");
            result.push_str(name.as_str());
            result.push('>');
        }
    }
    result.push_str(&options.terminator);

    debug!(
        approx_limit,
        cut = true,
        closed = open_tags.len(),
        "truncated speech markup"
    );
    result
}

/// Tags still open at the end of `markup`, in the order they were opened
fn unclosed_tags(markup: &str, self_closing: SelfClosingPolicy) -> Vec<&str> {
    let mut open_tags = Vec::new();

    for tag in TAG.find_iter(markup).map(|m| m.as_str()) {
        if self_closing == SelfClosingPolicy::Skip && tag.ends_with("/>") {
            continue;
        }
        if OPENING_TAG.is_match(tag) {
            open_tags.push(tag);
        } else {
            open_tags.pop();
        }
    }

    open_tags
}
