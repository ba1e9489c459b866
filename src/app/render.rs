use crate::links::{CacheEntry, LinkPreview, PreviewSource};
use std::time::Duration;

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Human-readable block for one preview.
pub fn render_preview(preview: &LinkPreview) -> String {
    let record = &preview.metadata;
    let source = match &preview.source {
        PreviewSource::Cache => "cache".to_string(),
        PreviewSource::Network => "network".to_string(),
        PreviewSource::Fallback(reason) => format!("fallback ({reason})"),
    };

    let mut lines = vec![
        format!("◆ {}", record.title),
        format!("  url          {}", record.url),
        format!("  domain       {}", record.domain),
    ];
    if !record.description.is_empty() {
        lines.push(format!("  description  {}", record.description));
    }
    if let Some(image) = &record.image {
        lines.push(format!("  image        {image}"));
    }
    lines.push(format!("  source       {source}"));
    lines.join("\n")
}

/// One line per cache entry: state, age and URL.
pub fn render_cache_entries(entries: &[CacheEntry], now_ms: i64, ttl: Duration) -> String {
    if entries.is_empty() {
        return "cache is empty".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            let url = entry
                .url
                .clone()
                .unwrap_or_else(|| entry.path.display().to_string());
            match &entry.record {
                Some(record) => {
                    let state = if record.is_fresh(now_ms, ttl) {
                        "fresh  "
                    } else {
                        "expired"
                    };
                    let age_hours = now_ms.saturating_sub(record.fetched_at) / HOUR_MS;
                    format!("{state} {age_hours:>5}h  {url}")
                }
                None => format!("corrupt     -  {url}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
