use crate::{ApiResult, HttpClient, ItemEnvelope, ListEnvelope};

use tf_core::Invitation;

use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

pub struct InvitationsApi<'a> {
    http: &'a HttpClient,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateInvitationRequest {
    pub workspace_id: Uuid,
    pub invitee_email: String,
}

impl<'a> InvitationsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List invitations sent for a workspace
    pub async fn list_for_workspace(
        &self,
        workspace_id: Uuid,
    ) -> ApiResult<ListEnvelope<Invitation>> {
        let req = self.http.request(
            Method::GET,
            &format!("/api/v1/workspaces/{}/invitations", workspace_id),
        );
        self.http.execute(req).await
    }

    /// List invitations addressed to the current user
    pub async fn list_mine(&self) -> ApiResult<ListEnvelope<Invitation>> {
        let req = self.http.request(Method::GET, "/api/v1/invitations");
        self.http.execute(req).await
    }

    /// Invite a user into a workspace by email
    pub async fn create(
        &self,
        body: &CreateInvitationRequest,
    ) -> ApiResult<ItemEnvelope<Invitation>> {
        let req = self
            .http
            .request(Method::POST, "/api/v1/invitations")
            .json(body);
        self.http.execute(req).await
    }

    /// Accept an invitation
    pub async fn accept(&self, id: Uuid) -> ApiResult<ItemEnvelope<Invitation>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/invitations/{}/accept", id));
        self.http.execute(req).await
    }

    /// Decline an invitation
    pub async fn decline(&self, id: Uuid) -> ApiResult<ItemEnvelope<Invitation>> {
        let req = self
            .http
            .request(Method::PUT, &format!("/api/v1/invitations/{}/decline", id));
        self.http.execute(req).await
    }

    /// Withdraw an invitation
    pub async fn delete(&self, id: Uuid) -> ApiResult<ItemEnvelope<Invitation>> {
        let req = self
            .http
            .request(Method::DELETE, &format!("/api/v1/invitations/{}", id));
        self.http.execute(req).await
    }
}
