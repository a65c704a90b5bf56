//! Built-in rules mapping HTML elements to the SSML vocabulary.

use super::Rule;
use crate::filter::Filter;
use crate::node::Node;
use crate::utilities::{escape_attr, marker, wrap_block, wrap_inline, BLOCK_CONTAINERS};

/// Create all built-in SSML rules
pub fn ssml_rules() -> Vec<Rule> {
    vec![
        paragraph_rule(),
        heading_rule(),
        line_break_rule(),
        thematic_break_rule(),
        strong_rule(),
        emphasis_rule(),
        list_item_rule(),
        audio_rule(),
        block_container_rule(),
    ]
}

fn paragraph_rule() -> Rule {
    Rule::for_tag("p", |_, content, _| wrap_block("p", "", content))
}

fn heading_rule() -> Rule {
    Rule::for_tags(&["h1", "h2", "h3", "h4", "h5", "h6"], |_, content, options| {
        let level = format!(r#" level="{}""#, options.heading_emphasis.as_str());
        let emphasized = wrap_inline("emphasis", &level, content.trim());
        wrap_block("p", "", &emphasized)
    })
}

fn line_break_rule() -> Rule {
    Rule::for_tag("br", |_, _, options| {
        marker("break", &format!(r#" strength="{}""#, options.line_break.as_str()))
    })
}

fn thematic_break_rule() -> Rule {
    Rule::for_tag("hr", |_, _, options| {
        let strength = format!(r#" strength="{}""#, options.thematic_break.as_str());
        format!(" {} ", marker("break", &strength))
    })
}

fn strong_rule() -> Rule {
    Rule::for_tags(&["strong", "b"], |_, content, options| {
        let level = format!(r#" level="{}""#, options.strong_emphasis.as_str());
        wrap_inline("emphasis", &level, content)
    })
}

fn emphasis_rule() -> Rule {
    Rule::for_tags(&["em", "i"], |_, content, options| {
        let level = format!(r#" level="{}""#, options.em_emphasis.as_str());
        wrap_inline("emphasis", &level, content)
    })
}

fn list_item_rule() -> Rule {
    Rule::for_tag("li", |_, content, _| wrap_block("s", "", content))
}

fn audio_rule() -> Rule {
    Rule::for_tag("audio", |node, _, _| match audio_source(node) {
        Some(src) => format!(" {} ", marker("audio", &format!(r#" src="{}""#, escape_attr(src)))),
        None => String::new(),
    })
}

/// `src` of the element itself, else of its first `<source>` child
fn audio_source(node: &Node) -> Option<&str> {
    node.attr("src")
        .or_else(|| {
            node.element_children()
                .filter(|child| child.tag_name() == "source")
                .find_map(|child| child.attr("src"))
        })
        .map(str::trim)
        .filter(|src| !src.is_empty())
}

fn block_container_rule() -> Rule {
    Rule::new(Filter::tags(BLOCK_CONTAINERS), |_, content, _| {
        format!(" {} ", content)
    })
}
