use std::sync::Arc;

use tf_api::resources::auth::{LoginRequest, RegisterRequest};
use tf_api::resources::users::UpdateProfileRequest;
use tf_api::ApiClient;
use tf_config::{Config, SessionFile};
use tf_core::User;
use tf_data::UserRepository;

use log::warn;
use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionUiState {
    pub loading: bool,
    pub authenticated: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

/// Backs the login screen and the account header.
///
/// Login and register talk to the auth endpoints directly (there is no
/// cached copy of credentials); the resulting session is persisted through
/// the config crate's session file so every later invocation picks it up.
pub struct SessionViewModel {
    api: Arc<ApiClient>,
    users: Arc<UserRepository>,
    config: Config,
    state: Arc<RwLock<SessionUiState>>,
}

impl SessionViewModel {
    pub fn new(api: Arc<ApiClient>, users: Arc<UserRepository>, config: Config) -> Self {
        Self {
            api,
            users,
            config,
            state: Arc::new(RwLock::new(SessionUiState::default())),
        }
    }

    pub async fn state(&self) -> SessionUiState {
        self.state.read().await.clone()
    }

    pub async fn login(&self, email: String, password: String) {
        self.state.write().await.loading = true;

        let body = LoginRequest { email, password };
        match self.api.auth().login(&body).await {
            Ok(envelope) if envelope.success => {
                let session = envelope.data;
                self.finish_login(session).await;
            }
            Ok(_) => self.fail("Login rejected").await,
            Err(e) => {
                warn!("Login failed: {}", e);
                self.fail("Couldn't reach the server").await;
            }
        }
    }

    pub async fn register(&self, username: String, email: String, password: String) {
        self.state.write().await.loading = true;

        let body = RegisterRequest {
            username,
            email,
            password,
        };
        match self.api.auth().register(&body).await {
            Ok(envelope) if envelope.success => {
                let session = envelope.data;
                self.finish_login(session).await;
            }
            Ok(_) => self.fail("Registration rejected").await,
            Err(e) => {
                warn!("Registration failed: {}", e);
                self.fail("Couldn't reach the server").await;
            }
        }
    }

    /// Drop the persisted session. Purely client-side.
    pub async fn logout(&self) {
        if let Ok(config_dir) = Config::config_dir()
            && let Err(e) = SessionFile::clear_from(&config_dir)
        {
            warn!("Couldn't remove session file: {}", e);
        }

        *self.state.write().await = SessionUiState::default();
    }

    /// Resolve the current user: fresh profile if reachable, cached row
    /// otherwise.
    pub async fn load_current_user(&self) {
        self.state.write().await.loading = true;

        let envelope = self.users.fetch_me().await;
        let user = match envelope.data {
            Some(user) => Some(user),
            None => match self.config.session.user_uuid() {
                Some(id) => self.users.cached_by_id(id).await.unwrap_or_default(),
                None => None,
            },
        };

        let authenticated = self.config.session.token.is_some();
        *self.state.write().await = SessionUiState {
            loading: false,
            authenticated,
            error: user.is_none().then(|| "Not signed in".to_string()),
            user,
        };
    }

    /// Change the signed-in user's display name or avatar.
    pub async fn update_profile(
        &self,
        display_name: Option<String>,
        avatar_url: Option<String>,
    ) {
        let body = UpdateProfileRequest {
            display_name,
            avatar_url,
        };
        let envelope = self.users.update_me(&body).await;

        let mut state = self.state.write().await;
        if envelope.success {
            state.user = envelope.data;
            state.error = None;
        } else {
            state.error = Some("Couldn't update profile".to_string());
        }
    }

    async fn finish_login(&self, session: Option<tf_core::Session>) {
        let Some(session) = session else {
            self.fail("Login rejected").await;
            return;
        };

        match Config::config_dir() {
            Ok(config_dir) => {
                let file = SessionFile::new(session.token.clone(), session.user.id);
                if let Err(e) = file.write_to(&config_dir) {
                    warn!("Couldn't persist session: {}", e);
                }
            }
            Err(e) => warn!("Couldn't resolve config directory: {}", e),
        }

        *self.state.write().await = SessionUiState {
            loading: false,
            authenticated: true,
            user: Some(session.user),
            error: None,
        };
    }

    async fn fail(&self, message: &str) {
        *self.state.write().await = SessionUiState {
            loading: false,
            authenticated: false,
            user: None,
            error: Some(message.to_string()),
        };
    }
}
