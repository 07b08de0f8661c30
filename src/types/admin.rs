//! Admin console types.

use crate::types::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard headline counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_resources: i64,
    pub pending_resources: i64,
    pub total_comments: i64,
}

/// A user row in the admin user list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Paginated admin user list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserListResponse {
    pub users: Vec<AdminUser>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Payload for enabling or disabling a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusRequest {
    pub is_active: bool,
}

/// Audit verdicts for resources and comments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Pending,
    Approved,
    Rejected,
}

impl AuditStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AuditStatus::Pending => "pending",
            AuditStatus::Approved => "approved",
            AuditStatus::Rejected => "rejected",
        }
    }
}

/// A resource awaiting review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingResource {
    pub id: String,
    pub title: String,
    pub uploader_name: String,
    pub created_at: DateTime<Utc>,
}

/// Paginated pending-resource list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingResourceListResponse {
    pub resources: Vec<PendingResource>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Payload for an audit verdict on a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResourceRequest {
    pub status: AuditStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A comment row in the admin moderation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminComment {
    pub id: String,
    pub resource_id: String,
    pub user_name: String,
    pub content: String,
    pub audit_status: AuditStatus,
    pub created_at: DateTime<Utc>,
}

/// Paginated admin comment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCommentListResponse {
    pub comments: Vec<AdminComment>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Payload for an audit verdict on a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditCommentRequest {
    pub status: AuditStatus,
}

/// Query parameters for admin list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_status: Option<AuditStatus>,
}
