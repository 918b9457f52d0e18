use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceRole {
    Leader,
    Member,
}

impl WorkspaceRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Leader => "leader",
            Self::Member => "member",
        }
    }
}

impl FromStr for WorkspaceRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "leader" => Ok(Self::Leader),
            "member" => Ok(Self::Member),
            _ => Err(CoreError::InvalidWorkspaceRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
