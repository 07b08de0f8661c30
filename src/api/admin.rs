//! Admin console endpoints.
//!
//! All of these require an admin session; authorization failures surface as
//! `ApiError::Status` like any other non-2xx response.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{
    AdminComment, AdminCommentListResponse, AdminListQuery, AdminUserListResponse,
    AuditCommentRequest, AuditResourceRequest, AuditStatus, DashboardStats,
    PendingResourceListResponse, UpdateUserStatusRequest,
};
use tracing::debug;

/// Admin endpoint wrapper.
#[derive(Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Dashboard headline counters.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        debug!("Fetching admin dashboard stats");
        self.client.get("/admin/dashboard").await
    }

    /// Paginated user list.
    pub async fn list_users(&self, query: &AdminListQuery) -> Result<AdminUserListResponse> {
        debug!("Fetching admin user list (page {:?})", query.page);
        self.client.get_query("/admin/users", query).await
    }

    /// Enable or disable a user account.
    pub async fn update_user_status(&self, user_id: &str, is_active: bool) -> Result<()> {
        debug!("Setting user {} active={}", user_id, is_active);
        let body = UpdateUserStatusRequest { is_active };
        self.client
            .put_ignore(&format!("/admin/users/{}/status", user_id), &body)
            .await
    }

    /// Resources awaiting review.
    pub async fn pending_resources(
        &self,
        query: &AdminListQuery,
    ) -> Result<PendingResourceListResponse> {
        debug!("Fetching pending resources (page {:?})", query.page);
        self.client.get_query("/admin/resources/pending", query).await
    }

    /// Record an audit verdict for a resource.
    pub async fn audit_resource(
        &self,
        resource_id: &str,
        status: AuditStatus,
        reason: Option<String>,
    ) -> Result<()> {
        debug!("Auditing resource {} as {}", resource_id, status.as_str());
        let body = AuditResourceRequest { status, reason };
        self.client
            .put_ignore(&format!("/admin/resources/{}/audit", resource_id), &body)
            .await
    }

    /// Paginated comment moderation list.
    pub async fn list_comments(&self, query: &AdminListQuery) -> Result<AdminCommentListResponse> {
        debug!("Fetching admin comment list (page {:?})", query.page);
        self.client.get_query("/admin/comments", query).await
    }

    /// Remove a comment.
    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        debug!("Deleting comment {} (admin)", comment_id);
        self.client
            .delete(&format!("/admin/comments/{}", comment_id))
            .await
    }

    /// Record an audit verdict for a comment.
    pub async fn audit_comment(&self, comment_id: &str, status: AuditStatus) -> Result<AdminComment> {
        debug!("Auditing comment {} as {}", comment_id, status.as_str());
        let body = AuditCommentRequest { status };
        self.client
            .put(&format!("/admin/comments/{}/audit", comment_id), &body)
            .await
    }
}
