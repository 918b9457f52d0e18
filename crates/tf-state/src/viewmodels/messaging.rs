use std::sync::Arc;

use tf_api::resources::channels::{CreateChannelRequest, UpdateChannelRequest};
use tf_api::resources::messages::{EditMessageRequest, MessageFilter, SendMessageRequest};
use tf_core::{Channel, Message};
use tf_data::{ChannelRepository, MessageRepository};

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MessagingUiState {
    pub loading: bool,
    pub workspace_id: Option<Uuid>,
    pub channels: Vec<Channel>,
    pub open_channel: Option<Uuid>,
    pub messages: Vec<Message>,
    /// Replies of the thread opened in the UI, keyed by its root message
    pub open_thread: Option<Uuid>,
    pub replies: Vec<Message>,
    pub error: Option<String>,
}

/// Backs the messaging screen: channel rail, message list, thread panel.
pub struct MessagingViewModel {
    channels: Arc<ChannelRepository>,
    messages: Arc<MessageRepository>,
    state: Arc<RwLock<MessagingUiState>>,
}

impl MessagingViewModel {
    pub fn new(channels: Arc<ChannelRepository>, messages: Arc<MessageRepository>) -> Self {
        Self {
            channels,
            messages,
            state: Arc::new(RwLock::new(MessagingUiState::default())),
        }
    }

    pub async fn state(&self) -> MessagingUiState {
        self.state.read().await.clone()
    }

    pub async fn load_cached(&self, workspace_id: Uuid) {
        let channels = self
            .channels
            .cached_by_workspace(workspace_id)
            .await
            .unwrap_or_default();
        *self.state.write().await = MessagingUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            channels,
            ..MessagingUiState::default()
        };
    }

    pub async fn refresh(&self, workspace_id: Uuid) {
        self.state.write().await.loading = true;

        let envelope = self.channels.fetch(workspace_id).await;
        let (channels, error) = if envelope.success {
            (envelope.data, None)
        } else {
            (
                self.channels
                    .cached_by_workspace(workspace_id)
                    .await
                    .unwrap_or_default(),
                Some("Couldn't refresh channels".to_string()),
            )
        };

        *self.state.write().await = MessagingUiState {
            loading: false,
            workspace_id: Some(workspace_id),
            channels,
            error,
            ..MessagingUiState::default()
        };
    }

    /// Open a channel: cached messages first, then the fresh page.
    pub async fn open_channel(&self, channel_id: Uuid) {
        {
            let cached = self
                .messages
                .cached_by_channel(channel_id)
                .await
                .unwrap_or_default();
            let mut state = self.state.write().await;
            state.open_channel = Some(channel_id);
            state.messages = cached;
            state.open_thread = None;
            state.replies = Vec::new();
        }

        let envelope = self
            .messages
            .fetch(channel_id, &MessageFilter::default())
            .await;
        let mut state = self.state.write().await;
        if envelope.success {
            state.messages = envelope.data;
        } else if state.messages.is_empty() {
            state.error = Some("Channel not available offline".to_string());
        }
    }

    /// Open the thread under one message.
    pub async fn open_thread(&self, message_id: Uuid) {
        let envelope = self.messages.fetch_replies(message_id).await;
        let replies = if envelope.success {
            envelope.data
        } else {
            self.messages
                .cached_replies(message_id)
                .await
                .unwrap_or_default()
        };

        let mut state = self.state.write().await;
        state.open_thread = Some(message_id);
        state.replies = replies;
    }

    pub async fn create_channel(&self, body: CreateChannelRequest) {
        let workspace_id = body.workspace_id;
        let envelope = self.channels.create(&body).await;
        if envelope.success {
            self.refresh(workspace_id).await;
        } else {
            self.state.write().await.error = Some("Couldn't create channel".to_string());
        }
    }

    pub async fn rename_channel(&self, channel_id: Uuid, name: String) {
        let body = UpdateChannelRequest {
            name: Some(name),
            ..UpdateChannelRequest::default()
        };
        let envelope = self.channels.update(channel_id, &body).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            (true, None) => {}
            _ => self.state.write().await.error = Some("Couldn't rename channel".to_string()),
        }
    }

    pub async fn delete_channel(&self, channel_id: Uuid) {
        let envelope = self.channels.delete(channel_id).await;
        let workspace_id = self.state.read().await.workspace_id;
        match (envelope.success, workspace_id) {
            (true, Some(workspace_id)) => self.refresh(workspace_id).await,
            (true, None) => {}
            _ => self.state.write().await.error = Some("Couldn't delete channel".to_string()),
        }
    }

    pub async fn send(&self, channel_id: Uuid, content: String, parent_id: Option<Uuid>) {
        let body = SendMessageRequest {
            channel_id,
            content,
            parent_id,
        };
        let envelope = self.messages.send(&body).await;
        if !envelope.success {
            self.state.write().await.error = Some("Couldn't send message".to_string());
            return;
        }

        match parent_id {
            Some(parent) => self.open_thread(parent).await,
            None => self.open_channel(channel_id).await,
        }
    }

    pub async fn edit(&self, message_id: Uuid, content: String) {
        let envelope = self
            .messages
            .edit(message_id, &EditMessageRequest { content })
            .await;
        let open_channel = self.state.read().await.open_channel;
        match (envelope.success, open_channel) {
            (true, Some(channel_id)) => self.open_channel(channel_id).await,
            (true, None) => {}
            _ => self.state.write().await.error = Some("Couldn't edit message".to_string()),
        }
    }

    pub async fn delete(&self, message_id: Uuid) {
        let envelope = self.messages.delete(message_id).await;
        let open_channel = self.state.read().await.open_channel;
        match (envelope.success, open_channel) {
            (true, Some(channel_id)) => self.open_channel(channel_id).await,
            (true, None) => {}
            _ => self.state.write().await.error = Some("Couldn't delete message".to_string()),
        }
    }
}
