//! In-memory post collection

use anyhow::Result;
use indexmap::IndexMap;

use super::loader::ContentLoader;
use super::query;
use super::Post;
use crate::Folio;

/// Owns a loaded post collection and answers queries over it.
///
/// The collection never changes after construction, so a store can be shared
/// between threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Wrap an already loaded collection
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Load every post of a site
    pub fn load(folio: &Folio) -> Result<Self> {
        let posts = ContentLoader::new(folio).load_posts()?;
        tracing::info!("Loaded {} posts", posts.len());
        Ok(Self::new(posts))
    }

    /// Every post, drafts included, in load order
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn published(&self) -> Vec<&Post> {
        query::list_published(&self.posts)
    }

    pub fn latest(&self, limit: usize) -> Vec<&Post> {
        query::list_latest(&self.posts, limit)
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        query::find_by_slug(&self.posts, slug)
    }

    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Post> {
        query::list_related(&self.posts, slug, limit)
    }

    /// Unpublished posts, newest first
    pub fn drafts(&self) -> Vec<&Post> {
        let mut drafts: Vec<&Post> = self.posts.iter().filter(|p| !p.published).collect();
        drafts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        drafts
    }

    /// Tag usage over published posts, most used first.
    /// Equal counts keep the order in which tags first appear, newest post first.
    pub fn tags(&self) -> IndexMap<&str, usize> {
        let mut tags: IndexMap<&str, usize> = IndexMap::new();
        for post in self.published() {
            for tag in &post.tags {
                *tags.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        tags.sort_by(|_, a, _, b| b.cmp(a));
        tags
    }
}

impl From<Vec<Post>> for PostStore {
    fn from(posts: Vec<Post>) -> Self {
        Self::new(posts)
    }
}
