//! # speakhtml-skill
//!
//! Request handling for an archive voice skill. Typed requests are
//! dispatched to canned responses or to two content flows:
//!
//! - **Stories**: a post is picked from a [`StoryArchive`] search, its
//!   authors are resolved from categories and its HTML body is spoken
//!   through [`speakhtml`], truncated to an excerpt when it is too long.
//! - **Audio**: an item is picked from an [`AudioArchive`] search and
//!   played from the CDN.
//!
//! Fetching, request signing and the voice platform envelope live outside
//! this crate: implement the archive traits over whatever client you use.

pub mod audio;
pub mod config;
pub mod request;
pub mod response;
mod skill;
pub mod source;
pub mod story;
pub mod texts;

pub use config::SkillConfig;
pub use request::{IntentRequest, Request, Slots};
pub use response::{Response, ResponseBuilder};
pub use skill::{intents, Skill, KEYWORD_SLOT};
pub use source::{AudioArchive, AudioItem, AudioQuery, Category, Post, StoryArchive};

/// Error type for content source lookups
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("content source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed response from content source: {0}")]
    Malformed(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: u64 },
}

/// Error type for request handling
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("invalid audio url {url}: {source}")]
    InvalidAudioUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unhandled intent: {0}")]
    UnhandledIntent(String),
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, SkillError>;
