use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("FOLIO_CACHE_DIR")
            && !dir.is_empty()
        {
            self.preview.cache_dir = PathBuf::from(dir);
        }

        if let Ok(ttl_str) = std::env::var("FOLIO_CACHE_TTL_SECS")
            && let Ok(ttl) = ttl_str.parse::<u64>()
        {
            self.preview.cache_ttl_secs = ttl;
        }

        if let Ok(timeout_str) = std::env::var("FOLIO_TIMEOUT_SECS")
            && let Ok(timeout) = timeout_str.parse::<u64>()
        {
            self.preview.timeout_secs = timeout;
        }

        if let Ok(agent) = std::env::var("FOLIO_USER_AGENT")
            && !agent.trim().is_empty()
        {
            self.preview.user_agent = agent;
        }

        if let Ok(level) = std::env::var("FOLIO_LOG")
            && level.parse::<tracing::Level>().is_ok()
        {
            self.log.level = level;
        }
    }
}
