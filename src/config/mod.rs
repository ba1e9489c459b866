mod env_overrides;
mod loader;
#[cfg(test)]
mod test_env;
mod types;

pub use loader::DEFAULT_CONFIG_FILE;
pub use types::{Config, LogConfig};
