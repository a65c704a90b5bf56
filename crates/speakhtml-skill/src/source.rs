//! Content sources queried by the skill.
//!
//! Implementations own the transport: HTTP clients, request signing and
//! response decoding all happen behind these traits.

use crate::SourceError;

/// A published story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    /// Rendered title (may contain HTML entities)
    pub title: String,
    /// Rendered HTML body
    pub content: String,
    /// Category ids, authors among them
    pub categories: Vec<u64>,
}

/// A post category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
    /// Parent category id, `0` for top-level categories
    pub parent: u64,
}

/// An archived audio item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioItem {
    pub title: String,
    pub creators: Vec<String>,
    /// Storage key of the original upload, extension included
    pub s3_key: String,
}

/// Search criteria sent to the audio archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioQuery {
    pub limit: usize,
    pub item_type: String,
}

impl Default for AudioQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            item_type: "Audio".to_string(),
        }
    }
}

/// Blog-style story archive
pub trait StoryArchive: Send + Sync {
    /// Posts matching `term`; an empty term matches everything
    fn search_posts(&self, term: &str) -> Result<Vec<Post>, SourceError>;

    fn category(&self, id: u64) -> Result<Category, SourceError>;
}

/// Signed item search API
pub trait AudioArchive: Send + Sync {
    fn search_audio(&self, query: &AudioQuery) -> Result<Vec<AudioItem>, SourceError>;
}
