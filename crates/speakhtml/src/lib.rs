//! # speakhtml
//!
//! Convert HTML fragments to speech markup (SSML) for voice responses.
//!
//! The crate has two halves:
//!
//! - **Conversion**: [`SpeechService`] walks a parsed fragment, drops every
//!   subtree a [`NodeFilter`] excludes, maps the remaining elements to a
//!   small SSML vocabulary (`p`, `s`, `emphasis`, `break`, `audio`) and
//!   replaces `{{{keyword_tag:...}}}` / `{{{concept_tag:...}}}` tokens with
//!   their terms.
//! - **Truncation**: [`truncate`] cuts markup to an approximate character
//!   budget and closes every tag the cut leaves open.
//!
//! ## Example
//!
//! ```rust
//! use speakhtml::{convert, truncate, Filter};
//!
//! let html = r#"<p>Hello <b>world</b></p><ul class="modern-footnotes-list"><li>note</li></ul>"#;
//! let speech = convert(html, &Filter::footnotes());
//! assert_eq!(speech, r#"<p>Hello <emphasis level="strong">world</emphasis></p>"#);
//!
//! assert_eq!(truncate(&speech, 9), "<p>Hello </p>.");
//! ```
//!
//! ## Example (Node-based)
//!
//! Without the `html` feature, build the tree by hand:
//!
//! ```rust
//! use speakhtml::{KeepAll, Node, SpeechService};
//!
//! let mut root = Node::element("div");
//! let mut p = Node::element("p");
//! p.add_child(Node::text("Hello"));
//! root.add_child(p);
//!
//! assert_eq!(SpeechService::new().convert_node(&root, &KeepAll), "<p>Hello</p>");
//! ```

pub mod filter;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod placeholder;
mod rules;
mod service;
pub mod truncate;
mod utilities;

pub use filter::{Filter, KeepAll, NodeFilter, FOOTNOTE_LIST_CLASS};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeDescriptor, NodeType};
pub use placeholder::{strip_placeholders, PlaceholderKind};
pub use rules::{ssml_rules, ReplacementFn, Rule, Rules};
pub use service::{BreakStrength, EmphasisLevel, SpeechOptions, SpeechService};
pub use truncate::{truncate, truncate_with, SelfClosingPolicy, TruncateOptions, TERMINATOR};
pub use utilities::*;

/// Convert an HTML fragment to speech markup with default options
#[cfg(feature = "html")]
pub fn convert(html: &str, filter: &dyn NodeFilter) -> String {
    SpeechService::new().convert(html, filter)
}
