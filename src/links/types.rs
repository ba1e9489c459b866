use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Preview metadata for one outbound link.
///
/// Serialized with the camelCase keys the site templates read
/// (`fetchedAt`), and written to the cache in this field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMetadata {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub domain: String,
    /// Milliseconds since the Unix epoch at which this record was produced.
    pub fetched_at: i64,
}

impl LinkMetadata {
    /// The degraded record: domain as title, empty description, no image.
    #[must_use]
    pub fn fallback(url: &str, now_ms: i64) -> Self {
        let domain = super::urls::extract_domain(url);
        Self {
            url: url.to_string(),
            title: domain.clone(),
            description: String::new(),
            image: None,
            domain,
            fetched_at: now_ms,
        }
    }

    /// `true` while the record is younger than `ttl` at `now_ms`.
    #[must_use]
    pub fn is_fresh(&self, now_ms: i64, ttl: Duration) -> bool {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        now_ms.saturating_sub(self.fetched_at) < ttl_ms
    }
}

/// Where a preview came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    Cache,
    Network,
    Fallback(FetchError),
}

/// A preview plus the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPreview {
    pub metadata: LinkMetadata,
    pub source: PreviewSource,
}

impl LinkPreview {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, PreviewSource::Fallback(_))
    }

    #[must_use]
    pub fn from_cache(&self) -> bool {
        self.source == PreviewSource::Cache
    }
}

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; LinkPreviewBot/1.0)";
pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Cache directory; relative paths resolve against the working directory.
    pub cache_dir: PathBuf,
    pub cache_ttl_secs: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub accept: String,
    pub max_redirects: usize,
}

impl PreviewConfig {
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(".link-preview-cache"),
            cache_ttl_secs: 7 * 24 * 60 * 60,
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            max_redirects: 5,
        }
    }
}
