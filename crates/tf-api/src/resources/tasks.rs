use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::{Priority, Task, TaskStatus};

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct TasksApi<'a> {
    http: &'a HttpClient,
}

/// List filters; page and limit pass straight through to the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskRequest {
    pub workspace_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    pub fn new(workspace_id: Uuid, title: String) -> Self {
        Self {
            workspace_id,
            title,
            description: None,
            epic_id: None,
            sprint_id: None,
            status: None,
            priority: None,
            assignee_id: None,
            due_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List tasks in a workspace
    pub async fn list(
        &self,
        workspace_id: Uuid,
        filter: &TaskFilter,
    ) -> ApiResult<ListEnvelope<Task>> {
        let req = self
            .http
            .request(
                Method::GET,
                &format!("/api/v1/workspaces/{}/tasks", workspace_id),
            )
            .query(filter);
        self.http.execute(req).await
    }

    /// Get a task by ID
    pub async fn get(&self, id: Uuid) -> ApiResult<ItemEnvelope<Task>> {
        let req = self.http.request(Method::GET, &format!("/api/v1/tasks/{}", id));
        self.http.execute(req).await
    }

    /// Create a new task
    pub async fn create(&self, body: &CreateTaskRequest) -> ApiResult<ItemEnvelope<Task>> {
        let req = self.http.request(Method::POST, "/api/v1/tasks").json(body);
        self.http.execute(req).await
    }

    /// Update a task
    pub async fn update(
        &self,
        id: Uuid,
        body: &UpdateTaskRequest,
    ) -> ApiResult<ItemEnvelope<Task>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/tasks/{}", id))
            .json(body);
        self.http.execute(req).await
    }

    /// Delete a task
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Task>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/tasks/{}", id));
        self.http.execute(req).await
    }
}
