use crate::{ConfigError, ConfigErrorResult, DEFAULT_CACHE_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache database file, relative to the config directory
    pub path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_CACHE_FILENAME),
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.path);
        if path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::cache(
                "cache.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
