//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub keywords: Vec<String>,

    // URL
    pub url: String,
    pub google_site_verification_id: Option<String>,

    // Directory
    pub content_dir: String,

    // Features
    pub features: FeatureFlags,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            keywords: Vec::new(),

            url: "https://example.com".to_string(),
            google_site_verification_id: None,

            content_dir: "content".to_string(),

            features: FeatureFlags::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Switches for optional site sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Blog listing, post pages and the Blog navigation link
    pub enable_blog: bool,
    /// Comment threads under posts
    pub enable_comments: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_blog: true,
            enable_comments: true,
        }
    }
}
