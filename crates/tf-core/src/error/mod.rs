use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid epic status: {value} {location}")]
    InvalidEpicStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid bug status: {value} {location}")]
    InvalidBugStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid bug severity: {value} {location}")]
    InvalidBugSeverity {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sprint status: {value} {location}")]
    InvalidSprintStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid notification type: {value} {location}")]
    InvalidNotificationType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid invitation status: {value} {location}")]
    InvalidInvitationStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid workspace role: {value} {location}")]
    InvalidWorkspaceRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
