//! Repository layer: one façade per entity combining the typed REST client
//! with the local cache table.
//!
//! Remote operations never surface transport errors. A successful response
//! is mirrored into the cache (best effort) and returned unchanged; a failed
//! call is logged and collapsed into the zeroed envelope shape, so callers
//! branch on `success` the same way they would on a live response.

pub mod repositories;

pub use repositories::bug_repository::BugRepository;
pub use repositories::channel_repository::ChannelRepository;
pub use repositories::epic_repository::EpicRepository;
pub use repositories::invitation_repository::InvitationRepository;
pub use repositories::message_repository::MessageRepository;
pub use repositories::notification_repository::NotificationRepository;
pub use repositories::report_repository::ReportRepository;
pub use repositories::sprint_repository::SprintRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::workspace_repository::WorkspaceRepository;
