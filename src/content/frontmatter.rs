//! Front-matter parsing for blog documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use thiserror::Error;

use crate::helpers::parse_date;

/// Errors raised while reading a document's front-matter
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("document has no front-matter block")]
    Missing,

    #[error("front-matter block is not closed with `---`")]
    Unterminated,

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("cannot parse publishedAt `{0}` as a date")]
    InvalidDate(String),
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter of a blog document
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: Option<String>,
    pub published_at: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub published: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            published_at: None,
            summary: None,
            image: None,
            tags: Vec::new(),
            published: true, // Posts are listed unless marked otherwise
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from a document.
    /// Returns (front_matter, body)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let rest = content
            .strip_prefix("---")
            .ok_or(FrontMatterError::Missing)?
            .trim_start_matches([' ', '\t'])
            .trim_start_matches(['\n', '\r']);

        // An empty block closes immediately
        let (yaml, body) = if let Some(after) = rest.strip_prefix("---") {
            ("", after)
        } else {
            let end = rest.find("\n---").ok_or(FrontMatterError::Unterminated)?;
            (&rest[..end], &rest[end + 4..])
        };
        let body = body.trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml)?;
        Ok((fm, body))
    }

    /// The required title
    pub fn title(&self) -> Result<&str, FrontMatterError> {
        required(&self.title, "title")
    }

    /// The required summary
    pub fn summary(&self) -> Result<&str, FrontMatterError> {
        required(&self.summary, "summary")
    }

    /// The required publication date, parsed
    pub fn published_at(&self) -> Result<DateTime<Utc>, FrontMatterError> {
        let raw = required(&self.published_at, "publishedAt")?;
        parse_date(raw).ok_or_else(|| FrontMatterError::InvalidDate(raw.to_string()))
    }
}

fn required<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, FrontMatterError> {
    field
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(FrontMatterError::MissingField(name))
}
