pub mod auth;
pub mod bugs;
pub mod channels;
pub mod epics;
pub mod invitations;
pub mod messages;
pub mod notifications;
pub mod reports;
pub mod sprints;
pub mod tasks;
pub mod users;
pub mod workspaces;
