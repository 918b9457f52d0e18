use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    TaskAssigned,
    BugAssigned,
    MessagePosted,
    InvitationReceived,
    SprintStarted,
    ReportSubmitted,
}

impl NotificationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::TaskAssigned => "task_assigned",
            Self::BugAssigned => "bug_assigned",
            Self::MessagePosted => "message_posted",
            Self::InvitationReceived => "invitation_received",
            Self::SprintStarted => "sprint_started",
            Self::ReportSubmitted => "report_submitted",
        }
    }
}

impl FromStr for NotificationType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "task_assigned" => Ok(Self::TaskAssigned),
            "bug_assigned" => Ok(Self::BugAssigned),
            "message_posted" => Ok(Self::MessagePosted),
            "invitation_received" => Ok(Self::InvitationReceived),
            "sprint_started" => Ok(Self::SprintStarted),
            "report_submitted" => Ok(Self::ReportSubmitted),
            _ => Err(CoreError::InvalidNotificationType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
