use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use uuid::Uuid;

/// Credentials attached to every API request. Normally populated from the
/// session file written at login; env overrides exist for scripting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Opaque bearer token
    pub token: Option<String>,
    /// Acting user id, sent as the X-User-Id header when no token is set
    pub user_id: Option<String>,
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref user_id) = self.user_id
            && Uuid::parse_str(user_id).is_err()
        {
            return Err(ConfigError::session(format!(
                "session.user_id must be a UUID, got {}",
                user_id
            )));
        }

        Ok(())
    }

    /// Parse the acting user id, if present and valid.
    pub fn user_uuid(&self) -> Option<Uuid> {
        self.user_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
    }
}
