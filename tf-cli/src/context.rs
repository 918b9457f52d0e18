use std::sync::Arc;

use tf_api::ApiClient;
use tf_config::Config;
use tf_data::{
    BugRepository, ChannelRepository, EpicRepository, InvitationRepository, MessageRepository,
    NotificationRepository, ReportRepository, SprintRepository, TaskRepository, UserRepository,
    WorkspaceRepository,
};

use uuid::Uuid;

/// Everything a command needs: the shared API client, the cache pool and
/// one repository per entity.
pub struct AppContext {
    pub config: Config,
    pub api: Arc<ApiClient>,
    pub workspaces: Arc<WorkspaceRepository>,
    pub users: Arc<UserRepository>,
    pub epics: Arc<EpicRepository>,
    pub tasks: Arc<TaskRepository>,
    pub bugs: Arc<BugRepository>,
    pub sprints: Arc<SprintRepository>,
    pub reports: Arc<ReportRepository>,
    pub notifications: Arc<NotificationRepository>,
    pub channels: Arc<ChannelRepository>,
    pub messages: Arc<MessageRepository>,
    pub invitations: Arc<InvitationRepository>,
}

impl AppContext {
    pub async fn build(config: Config) -> Result<Self, String> {
        let api = Arc::new(
            ApiClient::from_config(&config).map_err(|e| format!("HTTP client: {}", e))?,
        );

        let cache_path = config
            .cache_path()
            .map_err(|e| format!("Cache path: {}", e))?;
        let pool = tf_cache::open(&cache_path)
            .await
            .map_err(|e| format!("Cache: {}", e))?;

        Ok(Self {
            workspaces: Arc::new(WorkspaceRepository::new(api.clone(), pool.clone())),
            users: Arc::new(UserRepository::new(api.clone(), pool.clone())),
            epics: Arc::new(EpicRepository::new(api.clone(), pool.clone())),
            tasks: Arc::new(TaskRepository::new(api.clone(), pool.clone())),
            bugs: Arc::new(BugRepository::new(api.clone(), pool.clone())),
            sprints: Arc::new(SprintRepository::new(api.clone(), pool.clone())),
            reports: Arc::new(ReportRepository::new(api.clone(), pool.clone())),
            notifications: Arc::new(NotificationRepository::new(api.clone(), pool.clone())),
            channels: Arc::new(ChannelRepository::new(api.clone(), pool.clone())),
            messages: Arc::new(MessageRepository::new(api.clone(), pool.clone())),
            invitations: Arc::new(InvitationRepository::new(api.clone(), pool)),
            api,
            config,
        })
    }

    /// The acting user, taken from the session. Commands that scope their
    /// reads per-user (notifications) need this even offline.
    pub fn current_user(&self) -> Result<Uuid, String> {
        self.config
            .session
            .user_uuid()
            .ok_or_else(|| "No session; run `tf auth login` first".to_string())
    }
}
