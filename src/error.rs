use std::path::PathBuf;
use thiserror::Error;

// ─── Cache errors ────────────────────────────────────────────────────────────

/// Failures of the on-disk link preview cache.
///
/// Reads never surface these: a missing or corrupt entry is a cache miss.
/// Writes and maintenance operations report them so callers can log.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("io on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize record for {url}: {source}")]
    Serialize {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CacheError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// ─── Fetch errors ────────────────────────────────────────────────────────────

/// Why a preview degraded to the fallback record.
///
/// Carried inside `PreviewSource::Fallback`, so it holds rendered messages
/// rather than the underlying client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read body: {0}")]
    Body(String),
}

impl FetchError {
    pub(crate) fn from_reqwest(err: &reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_secs)
        } else {
            Self::Request(err.to_string())
        }
    }
}

// ─── Date errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date string: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            FetchError::Timeout(10).to_string(),
            "request timed out after 10s"
        );
    }

    #[test]
    fn date_error_names_the_input() {
        assert_eq!(
            DateError::Invalid("invalid-date".into()).to_string(),
            "Invalid date string: invalid-date"
        );
        assert_eq!(
            DateError::Invalid(String::new()).to_string(),
            "Invalid date string: "
        );
    }

    #[test]
    fn cache_io_error_includes_path() {
        let err = CacheError::io(
            "/tmp/cache/abc.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/cache/abc.json"));
        assert!(msg.contains("denied"));
    }
}
