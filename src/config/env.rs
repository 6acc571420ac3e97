//! Environment overrides for the site configuration

use thiserror::Error;
use url::Url;

use super::SiteConfig;

pub const SITE_URL: &str = "SITE_URL";
pub const GOOGLE_SITE_VERIFICATION_ID: &str = "GOOGLE_SITE_VERIFICATION_ID";
pub const ENABLE_BLOG: &str = "ENABLE_BLOG";
pub const ENABLE_COMMENTS: &str = "ENABLE_COMMENTS";

/// Invalid environment values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("SITE_URL must be an http(s) URL, got {0:?}")]
    InvalidUrl(String),

    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// A feature flag is on only for the exact string "true".
pub fn parse_flag(value: &str) -> bool {
    value == "true"
}

/// An absolute http(s) URL with a host
fn is_site_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

impl SiteConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), EnvError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `get`. Unset variables keep the
    /// configured value.
    pub fn apply_env_with<F>(&mut self, get: F) -> Result<(), EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = get(SITE_URL) {
            if !is_site_url(&url) {
                return Err(EnvError::InvalidUrl(url));
            }
            self.url = url;
        }

        if let Some(id) = get(GOOGLE_SITE_VERIFICATION_ID) {
            if id.is_empty() {
                return Err(EnvError::Empty(GOOGLE_SITE_VERIFICATION_ID));
            }
            self.google_site_verification_id = Some(id);
        }

        if let Some(value) = get(ENABLE_BLOG) {
            self.features.enable_blog = parse_flag(&value);
        }
        if let Some(value) = get(ENABLE_COMMENTS) {
            self.features.enable_comments = parse_flag(&value);
        }

        tracing::debug!("Feature flags: {:?}", self.features);
        Ok(())
    }
}
