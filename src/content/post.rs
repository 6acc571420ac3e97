//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A blog post record, as produced by the content loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier used for lookup and routing
    pub slug: String,

    /// Post title
    pub title: String,

    /// One-paragraph summary shown in listings
    pub summary: String,

    /// Publication date, used for ordering
    pub published_at: DateTime<Utc>,

    /// Post tags
    pub tags: Vec<String>,

    /// Whether the post is publicly listed
    pub published: bool,

    /// Cover image
    pub image: Option<String>,

    /// Estimated reading time ("3 min read")
    pub reading_time: String,

    /// Raw document body after the front-matter
    pub body: String,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Custom front-matter fields
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new published post with minimal required fields
    pub fn new(slug: &str, title: &str, published_at: DateTime<Utc>) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            summary: String::new(),
            published_at,
            tags: Vec::new(),
            published: true,
            image: None,
            reading_time: String::new(),
            body: String::new(),
            source: String::new(),
            extra: HashMap::new(),
        }
    }

    /// Whether this post carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether this post and `other` have at least one tag in common
    pub fn shares_tag_with(&self, other: &Post) -> bool {
        self.tags.iter().any(|tag| other.has_tag(tag))
    }
}
