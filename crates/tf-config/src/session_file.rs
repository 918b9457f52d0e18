use crate::{ConfigError, ConfigErrorResult, SESSION_FILENAME};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session credentials persisted by `tf auth login` and removed by
/// `tf auth logout`. Lives next to config.toml in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub token: String,
    pub user_id: Uuid,
}

impl SessionFile {
    pub fn new(token: String, user_id: Uuid) -> Self {
        Self { token, user_id }
    }

    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(SESSION_FILENAME)
    }

    /// Read the session file if it exists. A missing file is Ok(None);
    /// an unreadable or unparseable file is an error.
    pub fn read_from(config_dir: &Path) -> ConfigErrorResult<Option<Self>> {
        let path = Self::path_in(config_dir);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let session = toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })?;

        Ok(Some(session))
    }

    /// Write the session file, creating the config directory if needed.
    pub fn write_to(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let path = Self::path_in(config_dir);
        let contents = toml::to_string(self)
            .map_err(|e| ConfigError::session(format!("Failed to serialize session: {}", e)))?;

        std::fs::write(&path, contents).map_err(|e| ConfigError::Io { path, source: e })
    }

    /// Remove the session file. Removing a file that does not exist is Ok.
    pub fn clear_from(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = Self::path_in(config_dir);
        if !path.exists() {
            return Ok(());
        }

        std::fs::remove_file(&path).map_err(|e| ConfigError::Io { path, source: e })
    }
}
