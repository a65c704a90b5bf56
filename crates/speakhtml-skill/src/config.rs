//! Skill configuration.

use speakhtml::{SpeechOptions, FOOTNOTE_LIST_CLASS};
use url::Url;

use crate::ConfigError;

/// Character budget above which story bodies are cut to an excerpt
pub const DEFAULT_EXCERPT_BUDGET: usize = 7000;

/// Parent category id under which author categories are filed
pub const DEFAULT_AUTHOR_CATEGORY: u64 = 370;

pub const DEFAULT_SITE_NAME: &str = "Ocean-Archive.org";

/// Options for [`Skill`](crate::Skill)
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Site name spoken when pointing listeners to the full item
    pub site_name: String,

    /// Base URL of the CDN serving voice-ready audio renditions
    pub cdn_base_url: String,

    /// Story bodies longer than this many characters are truncated
    pub excerpt_budget: usize,

    /// Categories with this parent are authors
    pub author_category_parent: u64,

    /// Class of `<ul>` footnote lists left out of story bodies
    pub footnote_class: String,

    /// Conversion options for titles, names and story bodies
    pub speech: SpeechOptions,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            cdn_base_url: String::new(),
            excerpt_budget: DEFAULT_EXCERPT_BUDGET,
            author_category_parent: DEFAULT_AUTHOR_CATEGORY,
            footnote_class: FOOTNOTE_LIST_CLASS.to_string(),
            speech: SpeechOptions::default(),
        }
    }
}

impl SkillConfig {
    /// Load overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup`; unset keys keep their defaults.
    ///
    /// Keys: `ALEXA_CDN_BASE_URL`, `SKILL_SITE_NAME`, `SKILL_EXCERPT_BUDGET`,
    /// `SKILL_AUTHOR_CATEGORY`, `SKILL_FOOTNOTE_CLASS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("ALEXA_CDN_BASE_URL") {
            Url::parse(&url).map_err(|source| ConfigError::InvalidUrl {
                key: "ALEXA_CDN_BASE_URL",
                source,
            })?;
            config.cdn_base_url = url;
        }
        if let Some(name) = lookup("SKILL_SITE_NAME") {
            config.site_name = name;
        }
        if let Some(value) = lookup("SKILL_EXCERPT_BUDGET") {
            config.excerpt_budget = parse_number("SKILL_EXCERPT_BUDGET", &value)?;
        }
        if let Some(value) = lookup("SKILL_AUTHOR_CATEGORY") {
            config.author_category_parent = parse_number("SKILL_AUTHOR_CATEGORY", &value)?;
        }
        if let Some(class) = lookup("SKILL_FOOTNOTE_CLASS") {
            config.footnote_class = class;
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SkillConfig::default();
        assert_eq!(config.excerpt_budget, 7000);
        assert_eq!(config.author_category_parent, 370);
        assert_eq!(config.footnote_class, "modern-footnotes-list");
        assert_eq!(config.speech.truncate.self_closing, speakhtml::SelfClosingPolicy::Skip);
    }

    #[test]
    fn test_overrides() {
        let config = SkillConfig::from_lookup(lookup(&[
            ("ALEXA_CDN_BASE_URL", "https://cdn.example.org/voice"),
            ("SKILL_EXCERPT_BUDGET", " 500 "),
            ("SKILL_AUTHOR_CATEGORY", "12"),
            ("SKILL_SITE_NAME", "Example Archive"),
        ]))
        .unwrap();
        assert_eq!(config.cdn_base_url, "https://cdn.example.org/voice");
        assert_eq!(config.excerpt_budget, 500);
        assert_eq!(config.author_category_parent, 12);
        assert_eq!(config.site_name, "Example Archive");
    }

    #[test]
    fn test_invalid_values() {
        let err = SkillConfig::from_lookup(lookup(&[("SKILL_EXCERPT_BUDGET", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: "SKILL_EXCERPT_BUDGET", .. }));

        let err = SkillConfig::from_lookup(lookup(&[("ALEXA_CDN_BASE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }
}
