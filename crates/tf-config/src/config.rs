use crate::{
    CacheConfig, ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig, SessionConfig,
    SessionFile,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cache: CacheConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for TF_CONFIG_DIR env var, else use ./.teamflow/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Merge the session file written at login (token, user id)
    /// 5. Apply TF_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.merge_session_file(&config_dir);
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TF_CONFIG_DIR env var > ./.teamflow/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("TF_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".teamflow"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.cache.validate()?;
        self.session.validate()?;

        Ok(())
    }

    /// Get absolute path to the cache database file.
    pub fn cache_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.cache.path))
    }

    /// Get absolute path to the log file, if one is configured.
    pub fn log_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(self.logging.file.as_ref().map(|f| config_dir.join(f)))
    }

    /// Log configuration summary (NEVER logs the session token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {} (timeout {}s)",
            self.server.base_url, self.server.timeout_secs
        );
        info!("  cache: {}", self.cache.path);
        info!(
            "  session: {}",
            match (&self.session.token, &self.session.user_id) {
                (Some(_), _) => "bearer token",
                (None, Some(_)) => "user id header",
                (None, None) => "anonymous",
            }
        );
    }

    /// Fold the session file (written by login) into the session section.
    /// Explicit config.toml values win over the file.
    fn merge_session_file(&mut self, config_dir: &std::path::Path) {
        if let Ok(Some(file)) = SessionFile::read_from(config_dir) {
            if self.session.token.is_none() {
                self.session.token = Some(file.token);
            }
            if self.session.user_id.is_none() {
                self.session.user_id = Some(file.user_id.to_string());
            }
        }
    }

    /// Apply TF_* environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TF_SERVER_BASE_URL", &mut self.server.base_url);
        Self::apply_env_parse("TF_SERVER_TIMEOUT_SECS", &mut self.server.timeout_secs);

        // Cache
        Self::apply_env_string("TF_CACHE_PATH", &mut self.cache.path);

        // Session
        Self::apply_env_option_string("TF_SESSION_TOKEN", &mut self.session.token);
        Self::apply_env_option_string("TF_SESSION_USER_ID", &mut self.session.user_id);

        // Logging
        if let Ok(val) = std::env::var("TF_LOG_LEVEL")
            && let Ok(parsed) = val.parse()
        {
            self.logging.level = parsed;
        }
        Self::apply_env_option_string("TF_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
