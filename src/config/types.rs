use crate::links::PreviewConfig;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path the config was read from - not serialized
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LogConfig {
    pub fn max_level(&self) -> Result<Level> {
        self.level
            .parse::<Level>()
            .map_err(|_| anyhow::anyhow!("unknown log level '{}'", self.level))
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.preview.timeout_secs == 0 {
            bail!("preview.timeout_secs must be greater than zero");
        }
        if self.preview.cache_ttl_secs == 0 {
            bail!("preview.cache_ttl_secs must be greater than zero");
        }
        if self.preview.cache_dir.as_os_str().is_empty() {
            bail!("preview.cache_dir must not be empty");
        }
        if self.preview.user_agent.trim().is_empty() {
            bail!("preview.user_agent must not be empty");
        }
        self.log.max_level()?;
        Ok(())
    }
}
