use super::cache::{FileCache, MetadataCache};
use super::extract::PageMetadata;
use super::types::{LinkMetadata, LinkPreview, PreviewConfig, PreviewSource};
use super::urls::{extract_domain, resolve_image_url};
use crate::error::FetchError;
use anyhow::Result;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::sync::{Arc, Once};

/// Fetches link preview metadata through a cache.
///
/// Every call resolves to a usable [`LinkMetadata`]. Failures only show up as
/// a fallback record (domain as title) and a [`PreviewSource::Fallback`] flag,
/// and fallbacks are cached like successes so a dead link is not refetched
/// until its entry expires.
pub struct LinkPreviewer {
    client: reqwest::Client,
    cache: Arc<dyn MetadataCache>,
    config: PreviewConfig,
}

impl LinkPreviewer {
    /// Previewer backed by a [`FileCache`] at `config.cache_dir`.
    pub fn new(config: PreviewConfig) -> Result<Self> {
        let cache = Arc::new(FileCache::new(config.cache_dir.clone()));
        Self::with_cache(config, cache)
    }

    pub fn with_cache(config: PreviewConfig, cache: Arc<dyn MetadataCache>) -> Result<Self> {
        install_crypto_provider();

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_str(&config.accept)?);

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self {
            client,
            cache,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Metadata for `url`, from cache when fresh, else from the network.
    pub async fn fetch_link_metadata(&self, url: &str) -> LinkMetadata {
        self.preview(url).await.metadata
    }

    /// Like [`fetch_link_metadata`](Self::fetch_link_metadata), reporting
    /// where the record came from.
    pub async fn preview(&self, url: &str) -> LinkPreview {
        let now = now_ms();
        if let Some(cached) = self.cache.get(url)
            && cached.is_fresh(now, self.config.cache_ttl())
        {
            tracing::debug!(url = %url, "link preview cache hit");
            return LinkPreview {
                metadata: cached,
                source: PreviewSource::Cache,
            };
        }

        tracing::info!(url = %url, "fetching link metadata");

        let preview = match self.fetch_page(url).await {
            Ok(html) => LinkPreview {
                metadata: build_metadata(url, &html, now_ms()),
                source: PreviewSource::Network,
            },
            Err(reason) => {
                match &reason {
                    FetchError::Status(status) => {
                        tracing::warn!(url = %url, status, "link preview request returned error status");
                    }
                    other => {
                        tracing::warn!(url = %url, error = %other, "link preview request failed");
                    }
                }
                LinkPreview {
                    metadata: LinkMetadata::fallback(url, now_ms()),
                    source: PreviewSource::Fallback(reason),
                }
            }
        };

        if let Err(e) = self.cache.put(&preview.metadata) {
            tracing::warn!(url = %url, error = %e, "failed to cache link metadata");
        }

        preview
    }

    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let timeout_secs = self.config.timeout_secs;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e, timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(timeout_secs)
            } else {
                FetchError::Body(e.to_string())
            }
        })
    }
}

/// Assemble a record from a fetched page.
#[must_use]
pub fn build_metadata(url: &str, html: &str, now_ms: i64) -> LinkMetadata {
    let page = PageMetadata::from_html(html);
    let domain = extract_domain(url);

    LinkMetadata {
        url: url.to_string(),
        title: page.title().map_or_else(|| domain.clone(), str::to_string),
        description: page.description().unwrap_or_default().to_string(),
        image: page.image().and_then(|image| resolve_image_url(image, url)),
        domain,
        fetched_at: now_ms,
    }
}

#[must_use]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn install_crypto_provider() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        // Another provider may already be installed by the host binary.
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_prefers_open_graph() {
        let html = r#"<head>
            <title>Fallback Title</title>
            <meta property="og:title" content="OG Title">
            <meta name="description" content="Plain description">
            <meta property="og:description" content="OG description">
            <meta property="og:image" content="/images/card.png">
        </head>"#;
        let record = build_metadata("https://www.example.com/blog/post", html, 7);

        assert_eq!(record.title, "OG Title");
        assert_eq!(record.description, "OG description");
        assert_eq!(
            record.image.as_deref(),
            Some("https://www.example.com/images/card.png")
        );
        assert_eq!(record.domain, "example.com");
        assert_eq!(record.fetched_at, 7);
    }

    #[test]
    fn build_falls_back_to_domain_and_empty_description() {
        let record = build_metadata("https://www.example.com/", "<html><body>hi</body></html>", 0);
        assert_eq!(record.title, "example.com");
        assert_eq!(record.description, "");
        assert!(record.image.is_none());
    }

    #[test]
    fn build_uses_twitter_image_when_no_og_image() {
        let html = r#"<meta content="//cdn.example.com/t.png" name="twitter:image">"#;
        let record = build_metadata("https://example.com", html, 0);
        assert_eq!(record.image.as_deref(), Some("https://cdn.example.com/t.png"));
    }

    #[test]
    fn previewer_builds_from_default_config() {
        let previewer = LinkPreviewer::new(PreviewConfig::default()).unwrap();
        assert_eq!(previewer.config().timeout_secs, 10);
    }
}
