//! Content loader - loads blog posts from the content directory

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

use super::{FrontMatter, Post, ReadingTime};
use crate::Folio;

/// Loads blog documents from `<content_dir>/blog`
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load every post, drafts included, in source path order.
    ///
    /// Files that fail to load are logged and skipped.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let blog_dir = self.folio.blog_dir();
        if !blog_dir.exists() {
            tracing::debug!("No blog directory at {:?}", blog_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen = HashSet::new();

        for entry in WalkDir::new(&blog_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {:?}: {}", blog_dir, e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !is_post_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(post) => {
                    tracing::debug!("Loaded post {} from {:?}", post.slug, path);
                    if !seen.insert(post.slug.clone()) {
                        tracing::warn!("Duplicate slug {:?} in {:?}", post.slug, path);
                    }
                    posts.push(post);
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                }
            }
        }

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let slug = slug_for(&self.folio.blog_dir(), path)
            .with_context(|| format!("cannot derive slug for {:?}", path))?;

        let source = path
            .strip_prefix(&self.folio.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let mut post = Post::new(&slug, fm.title()?, fm.published_at()?);
        post.summary = fm.summary()?.to_string();
        post.image = fm.image;
        post.tags = fm.tags;
        post.published = fm.published;
        post.reading_time = ReadingTime::estimate(body).to_string();
        post.body = body.to_string();
        post.source = source;
        post.extra = fm.extra;

        Ok(post)
    }
}

/// Derive a post slug from its path relative to the blog directory:
/// `blog/2025/hello.mdx` becomes `2025/hello`, and a nested
/// `blog/hello/index.mdx` collapses to its directory, `hello`.
pub fn slug_for(blog_dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(blog_dir).ok()?.with_extension("");

    let mut parts: Vec<&str> = relative
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Option<_>>()?;

    if parts.len() > 1 && parts.last() == Some(&"index") {
        parts.pop();
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Check if a file is a blog document (`.mdx`, or plain `.md`)
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "mdx" || e == "md")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site() -> (TempDir, Folio) {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::with_config(tmp.path(), SiteConfig::default());
        (tmp, folio)
    }

    #[test]
    fn test_slug_for() {
        let blog = PathBuf::from("/site/content/blog");
        assert_eq!(
            slug_for(&blog, &blog.join("hello-world.mdx")),
            Some("hello-world".to_string())
        );
        assert_eq!(
            slug_for(&blog, &blog.join("2025").join("intro.md")),
            Some("2025/intro".to_string())
        );
        assert_eq!(slug_for(&blog, Path::new("/elsewhere/post.mdx")), None);
    }

    #[test]
    fn test_slug_for_index_documents() {
        let blog = PathBuf::from("/site/content/blog");
        assert_eq!(
            slug_for(&blog, &blog.join("hello").join("index.mdx")),
            Some("hello".to_string())
        );
        assert_eq!(
            slug_for(&blog, &blog.join("2025").join("hello").join("index.mdx")),
            Some("2025/hello".to_string())
        );
        assert_eq!(
            slug_for(&blog, &blog.join("index.mdx")),
            Some("index".to_string())
        );
        assert_eq!(
            slug_for(&blog, &blog.join("hello").join("index-notes.mdx")),
            Some("hello/index-notes".to_string())
        );
    }

    #[test]
    fn test_load_index_document() {
        let (_tmp, folio) = site();
        write(
            &folio.blog_dir(),
            "bundled/index.mdx",
            "---
title: Bundled
publishedAt: '2025-03-01'
summary: s
---
",
        );

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "bundled");
        assert_eq!(posts[0].source, "blog/bundled/index.mdx");
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_entries_are_skipped() {
        let (_tmp, folio) = site();
        let blog = folio.blog_dir();
        write(
            &blog,
            "good.mdx",
            "---\ntitle: Good\npublishedAt: '2025-01-01'\nsummary: s\n---\n",
        );
        // a loop back to the blog dir and a dangling link both fail to walk
        std::os::unix::fs::symlink(&blog, blog.join("loop")).unwrap();
        std::os::unix::fs::symlink(blog.join("gone.mdx"), blog.join("dangling.mdx")).unwrap();

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["good"]);
    }

    #[test]
    fn test_missing_blog_dir() {
        let (_tmp, folio) = site();
        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_load_posts() {
        let (_tmp, folio) = site();
        let blog = folio.blog_dir();
        write(
            &blog,
            "first-post.mdx",
            "---\ntitle: First Post\npublishedAt: '2025-01-15'\nsummary: First\ntags: [nextjs, react]\nimage: /images/first.png\n---\n\nContent here\n",
        );
        write(
            &blog,
            "drafts/draft-post.md",
            "---\ntitle: Draft Post\npublishedAt: '2025-01-20'\nsummary: Draft\npublished: false\n---\nWork in progress\n",
        );
        write(&blog, "notes.txt", "not a post");

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        assert_eq!(posts.len(), 2);

        let draft = &posts[0];
        assert_eq!(draft.slug, "drafts/draft-post");
        assert!(!draft.published);
        assert_eq!(draft.source, "blog/drafts/draft-post.md");

        let first = &posts[1];
        assert_eq!(first.slug, "first-post");
        assert_eq!(first.title, "First Post");
        assert_eq!(first.tags, vec!["nextjs", "react"]);
        assert_eq!(first.image.as_deref(), Some("/images/first.png"));
        assert_eq!(first.reading_time, "1 min read");
        assert_eq!(first.body, "Content here\n");
    }

    #[test]
    fn test_invalid_posts_are_skipped() {
        let (_tmp, folio) = site();
        let blog = folio.blog_dir();
        write(&blog, "no-frontmatter.mdx", "# Hello\n");
        write(
            &blog,
            "no-summary.mdx",
            "---\ntitle: No Summary\npublishedAt: '2025-01-01'\n---\n",
        );
        write(
            &blog,
            "bad-date.mdx",
            "---\ntitle: Bad Date\npublishedAt: soon\nsummary: s\n---\n",
        );
        write(
            &blog,
            "good.mdx",
            "---\ntitle: Good\npublishedAt: '2025-01-01'\nsummary: s\n---\n",
        );

        let posts = ContentLoader::new(&folio).load_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["good"]);
    }
}
