use super::types::LinkMetadata;
use crate::error::CacheError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;

const ENTRY_EXTENSION: &str = "json";

/// Storage seam for link preview records, keyed by URL.
pub trait MetadataCache: Send + Sync {
    /// The stored record, if one exists and parses. Never judges freshness.
    fn get(&self, url: &str) -> Option<LinkMetadata>;

    /// Replace the record stored under `record.url`.
    fn put(&self, record: &LinkMetadata) -> Result<(), CacheError>;
}

/// One JSON file per URL under a root directory.
///
/// File names are the URL-safe base64 of the URL, so every entry maps back
/// to its URL without an index. Each write goes through its own temporary
/// file in the root and a rename; concurrent writers for the same URL never
/// share a temporary file and the last rename wins.
#[derive(Debug, Clone)]
pub struct FileCache {
    root: PathBuf,
}

/// A cache file found on disk.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub path: PathBuf,
    /// Decoded from the file name; `None` for names this cache did not write.
    pub url: Option<String>,
    /// `None` when the file is unreadable or corrupt.
    pub record: Option<LinkMetadata>,
}

impl FileCache {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn key_for(url: &str) -> String {
        URL_SAFE_NO_PAD.encode(url.as_bytes())
    }

    /// Recover the URL from a cache file name (with or without extension).
    #[must_use]
    pub fn decode_key(file_name: &str) -> Option<String> {
        let key = file_name
            .strip_suffix(&format!(".{ENTRY_EXTENSION}"))
            .unwrap_or(file_name);
        let bytes = URL_SAFE_NO_PAD.decode(key).ok()?;
        String::from_utf8(bytes).ok()
    }

    #[must_use]
    pub fn path_for(&self, url: &str) -> PathBuf {
        self.root
            .join(format!("{}.{ENTRY_EXTENSION}", Self::key_for(url)))
    }

    /// Every entry file under the root. A missing root is an empty cache.
    pub fn entries(&self) -> Result<Vec<CacheEntry>, CacheError> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CacheError::io(&self.root, e)),
        };

        let mut entries = Vec::new();
        for item in dir {
            let path = item.map_err(|e| CacheError::io(&self.root, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(ENTRY_EXTENSION) {
                continue;
            }
            let url = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(Self::decode_key);
            let record = read_record(&path);
            entries.push(CacheEntry { path, url, record });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    /// Remove expired and corrupt entries. Returns how many were removed.
    pub fn prune(&self, now_ms: i64, ttl: Duration) -> Result<usize, CacheError> {
        let mut removed = 0;
        for entry in self.entries()? {
            let keep = entry
                .record
                .as_ref()
                .is_some_and(|record| record.is_fresh(now_ms, ttl));
            if !keep {
                remove_entry(&entry.path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Remove every entry. Returns how many were removed.
    pub fn clear(&self) -> Result<usize, CacheError> {
        let entries = self.entries()?;
        for entry in &entries {
            remove_entry(&entry.path)?;
        }
        Ok(entries.len())
    }
}

impl MetadataCache for FileCache {
    fn get(&self, url: &str) -> Option<LinkMetadata> {
        let path = self.path_for(url);
        if !path.exists() {
            return None;
        }
        let record = read_record(&path);
        if record.is_none() {
            tracing::debug!(url = %url, path = %path.display(), "ignoring unreadable cache entry");
        }
        record
    }

    fn put(&self, record: &LinkMetadata) -> Result<(), CacheError> {
        fs::create_dir_all(&self.root).map_err(|e| CacheError::io(&self.root, e))?;

        let body = serde_json::to_string_pretty(record).map_err(|source| CacheError::Serialize {
            url: record.url.clone(),
            source,
        })?;

        let path = self.path_for(&record.url);
        let mut staging =
            NamedTempFile::new_in(&self.root).map_err(|e| CacheError::io(&self.root, e))?;
        staging
            .write_all(body.as_bytes())
            .map_err(|e| CacheError::io(staging.path(), e))?;
        staging
            .persist(&path)
            .map(|_| ())
            .map_err(|e| CacheError::io(&path, e.error))
    }
}

fn read_record(path: &Path) -> Option<LinkMetadata> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

fn remove_entry(path: &Path) -> Result<(), CacheError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CacheError::io(path, e)),
    }
}
