use std::sync::Arc;

use tf_api::resources::workspaces::{
    AddMemberRequest, CreateWorkspaceRequest, UpdateWorkspaceRequest, WorkspaceFilter,
};
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::{UserTable, WorkspaceTable};
use tf_core::{User, Workspace};

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Façade over the workspace endpoints, the workspace table and the user
/// table (member profiles are mirrored alongside).
pub struct WorkspaceRepository {
    api: Arc<ApiClient>,
    table: WorkspaceTable,
    users: UserTable,
}

impl WorkspaceRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: WorkspaceTable::new(pool.clone()),
            users: UserTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_all(&self) -> tf_cache::Result<Vec<Workspace>> {
        self.table.get_all().await
    }

    pub async fn cached_by_id(&self, id: Uuid) -> tf_cache::Result<Option<Workspace>> {
        self.table.get_by_id(id).await
    }

    pub async fn cached_members(&self, id: Uuid) -> tf_cache::Result<Vec<User>> {
        let member_ids = self.table.members(id).await?;
        let mut users = Vec::with_capacity(member_ids.len());
        for member_id in member_ids {
            if let Some(user) = self.users.get_by_id(member_id).await? {
                users.push(user);
            }
        }
        Ok(users)
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, filter: &WorkspaceFilter) -> ListEnvelope<Workspace> {
        match self.api.workspaces().list(filter).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Workspace list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn fetch_by_id(&self, id: Uuid) -> ItemEnvelope<Workspace> {
        match self.api.workspaces().get(id).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Workspace fetch failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    /// Fetch member profiles; mirrored into the user table.
    pub async fn fetch_members(&self, id: Uuid) -> ListEnvelope<User> {
        match self.api.workspaces().members(id).await {
            Ok(envelope) => {
                if let Err(e) = self.users.upsert_all(&envelope.data).await {
                    warn!("User cache write failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Workspace members fetch failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn create(&self, body: &CreateWorkspaceRequest) -> ItemEnvelope<Workspace> {
        match self.api.workspaces().create(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Workspace create failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn update(&self, id: Uuid, body: &UpdateWorkspaceRequest) -> ItemEnvelope<Workspace> {
        match self.api.workspaces().update(id, body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Workspace update failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Workspace> {
        match self.api.workspaces().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Workspace cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Workspace delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn add_member(&self, id: Uuid, user_id: Uuid) -> ItemEnvelope<Workspace> {
        let body = AddMemberRequest { user_id };
        match self.api.workspaces().add_member(id, &body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Workspace add member failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn remove_member(&self, id: Uuid, user_id: Uuid) -> ItemEnvelope<Workspace> {
        match self.api.workspaces().remove_member(id, user_id).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Workspace remove member failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, workspace: Option<&Workspace>) {
        if let Some(workspace) = workspace
            && let Err(e) = self.table.upsert(workspace).await
        {
            warn!("Workspace cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, workspaces: &[Workspace]) {
        if let Err(e) = self.table.upsert_all(workspaces).await {
            warn!("Workspace cache write failed: {}", e);
        }
    }
}
