//! folio-rs: blog backend for a personal portfolio site
//!
//! Loads MDX/Markdown blog posts from a content directory and answers the
//! listing, lookup and related-post queries a rendering layer needs, from the
//! command line or over a small JSON API.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod site;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Blog documents live in this directory under the content directory
pub const BLOG_DIR: &str = "blog";

/// The main application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory, reading `_config.yml` and
    /// environment overrides
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        Self::with_env(base_dir, |key| std::env::var(key).ok())
    }

    /// Like [`Folio::new`], reading environment overrides through `get`
    pub fn with_env<P, F>(base_dir: P, get: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join("_config.yml");

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env_with(get)?;

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Directory holding the blog documents
    pub fn blog_dir(&self) -> PathBuf {
        self.content_dir.join(BLOG_DIR)
    }

    /// Whether blog features are exposed
    pub fn blog_enabled(&self) -> bool {
        self.config.features.enable_blog
    }

    /// Load every post into a store
    pub fn load_posts(&self) -> Result<content::PostStore> {
        content::PostStore::load(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_with_config_paths() {
        let mut config = config::SiteConfig::default();
        config.content_dir = "src/content".to_string();
        let folio = Folio::with_config("/site", config);

        assert_eq!(folio.content_dir, PathBuf::from("/site/src/content"));
        assert_eq!(folio.blog_dir(), PathBuf::from("/site/src/content/blog"));
        assert!(folio.blog_enabled());
    }

    #[test]
    fn test_reads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "title: Test Site\ncontent_dir: posts\n",
        )
        .unwrap();

        let folio = Folio::with_env(tmp.path(), |_| None).unwrap();
        assert_eq!(folio.config.title, "Test Site");
        assert_eq!(folio.content_dir, tmp.path().join("posts"));
        assert!(folio.blog_enabled());
    }

    #[test]
    fn test_env_overrides_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "url: https://example.org\nfeatures:\n  enable_blog: true\n",
        )
        .unwrap();

        let folio = Folio::with_env(tmp.path(), |key| match key {
            "ENABLE_BLOG" => Some("false".to_string()),
            "SITE_URL" => Some("https://dariocuevas.com".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(!folio.blog_enabled());
        assert_eq!(folio.config.url, "https://dariocuevas.com");

        let err = Folio::with_env(tmp.path(), |key| {
            (key == "SITE_URL").then(|| "not a url".to_string())
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_invalid_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_config.yml"), "features: [not, a, map]\n").unwrap();

        assert!(Folio::with_env(tmp.path(), |_| None).is_err());
    }
}
