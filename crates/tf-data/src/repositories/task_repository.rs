use std::sync::Arc;

use tf_api::resources::tasks::{CreateTaskRequest, TaskFilter, UpdateTaskRequest};
use tf_api::{ApiClient, ItemEnvelope, ListEnvelope};
use tf_cache::TaskTable;
use tf_core::{Task, TaskStatus};

use log::warn;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Façade over the task endpoints and the local task table.
pub struct TaskRepository {
    api: Arc<ApiClient>,
    table: TaskTable,
}

impl TaskRepository {
    pub fn new(api: Arc<ApiClient>, pool: SqlitePool) -> Self {
        Self {
            api,
            table: TaskTable::new(pool),
        }
    }

    // =========================================================================
    // Local reads
    // =========================================================================

    pub async fn cached_by_workspace(&self, workspace_id: Uuid) -> tf_cache::Result<Vec<Task>> {
        self.table.get_by_workspace(workspace_id).await
    }

    pub async fn cached_by_id(&self, id: Uuid) -> tf_cache::Result<Option<Task>> {
        self.table.get_by_id(id).await
    }

    pub async fn cached_by_epic(&self, epic_id: Uuid) -> tf_cache::Result<Vec<Task>> {
        self.table.get_by_epic(epic_id).await
    }

    pub async fn cached_by_sprint(&self, sprint_id: Uuid) -> tf_cache::Result<Vec<Task>> {
        self.table.get_by_sprint(sprint_id).await
    }

    pub async fn cached_by_status(
        &self,
        workspace_id: Uuid,
        status: &TaskStatus,
    ) -> tf_cache::Result<Vec<Task>> {
        self.table.get_by_status(workspace_id, status).await
    }

    // =========================================================================
    // Remote operations, mirrored into the cache on success
    // =========================================================================

    pub async fn fetch(&self, workspace_id: Uuid, filter: &TaskFilter) -> ListEnvelope<Task> {
        match self.api.tasks().list(workspace_id, filter).await {
            Ok(envelope) => {
                self.mirror_all(&envelope.data).await;
                envelope
            }
            Err(e) => {
                warn!("Task list failed: {}", e);
                ListEnvelope::failed()
            }
        }
    }

    pub async fn fetch_by_id(&self, id: Uuid) -> ItemEnvelope<Task> {
        match self.api.tasks().get(id).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Task fetch failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn create(&self, body: &CreateTaskRequest) -> ItemEnvelope<Task> {
        match self.api.tasks().create(body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Task create failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn update(&self, id: Uuid, body: &UpdateTaskRequest) -> ItemEnvelope<Task> {
        match self.api.tasks().update(id, body).await {
            Ok(envelope) => {
                self.mirror(envelope.data.as_ref()).await;
                envelope
            }
            Err(e) => {
                warn!("Task update failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> ItemEnvelope<Task> {
        match self.api.tasks().delete(id).await {
            Ok(envelope) => {
                if envelope.success
                    && let Err(e) = self.table.delete(id).await
                {
                    warn!("Task cache delete failed: {}", e);
                }
                envelope
            }
            Err(e) => {
                warn!("Task delete failed: {}", e);
                ItemEnvelope::failed()
            }
        }
    }

    async fn mirror(&self, task: Option<&Task>) {
        if let Some(task) = task
            && let Err(e) = self.table.upsert(task).await
        {
            warn!("Task cache write failed: {}", e);
        }
    }

    async fn mirror_all(&self, tasks: &[Task]) {
        if let Err(e) = self.table.upsert_all(tasks).await {
            warn!("Task cache write failed: {}", e);
        }
    }
}
