use crate::http::HttpClient;
use crate::resources::auth::AuthApi;
use crate::resources::bugs::BugsApi;
use crate::resources::channels::ChannelsApi;
use crate::resources::epics::EpicsApi;
use crate::resources::invitations::InvitationsApi;
use crate::resources::messages::MessagesApi;
use crate::resources::notifications::NotificationsApi;
use crate::resources::reports::ReportsApi;
use crate::resources::sprints::SprintsApi;
use crate::resources::tasks::TasksApi;
use crate::resources::users::UsersApi;
use crate::resources::workspaces::WorkspacesApi;
use crate::ApiResult;

use std::time::Duration;

use tf_config::Config;

/// Entry point for the REST API: owns the transport, hands out one thin
/// typed client per resource.
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        token: Option<&str>,
        user_id: Option<&str>,
    ) -> ApiResult<Self> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout, token, user_id)?,
        })
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(
            &config.server.base_url,
            Duration::from_secs(config.server.timeout_secs),
            config.session.token.as_deref(),
            config.session.user_id.as_deref(),
        )
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    pub fn workspaces(&self) -> WorkspacesApi<'_> {
        WorkspacesApi::new(&self.http)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(&self.http)
    }

    pub fn epics(&self) -> EpicsApi<'_> {
        EpicsApi::new(&self.http)
    }

    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(&self.http)
    }

    pub fn bugs(&self) -> BugsApi<'_> {
        BugsApi::new(&self.http)
    }

    pub fn sprints(&self) -> SprintsApi<'_> {
        SprintsApi::new(&self.http)
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(&self.http)
    }

    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi::new(&self.http)
    }

    pub fn channels(&self) -> ChannelsApi<'_> {
        ChannelsApi::new(&self.http)
    }

    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(&self.http)
    }

    pub fn invitations(&self) -> InvitationsApi<'_> {
        InvitationsApi::new(&self.http)
    }
}
