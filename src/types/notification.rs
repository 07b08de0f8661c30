//! Notification types for the notification system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification type categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    AuditResult,
    ClaimResult,
    CommentReply,
    RatingReminder,
    AdminMessage,
    System,
}

impl NotificationType {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationType::AuditResult => "audit_result",
            NotificationType::ClaimResult => "claim_result",
            NotificationType::CommentReply => "comment_reply",
            NotificationType::RatingReminder => "rating_reminder",
            NotificationType::AdminMessage => "admin_message",
            NotificationType::System => "system",
        }
    }
}

/// Notification priority levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    High,
    Normal,
}

/// A notification addressed to a user, or broadcast when `recipient_id` is
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification ID
    pub id: String,
    /// Addressed user, or None for broadcast notifications
    pub recipient_id: Option<String>,
    /// Short title
    pub title: String,
    /// Body text
    pub content: String,
    /// Notification category
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// Priority level
    pub priority: NotificationPriority,
    /// Whether the notification has been read
    pub is_read: bool,
    /// Optional deep-link target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Creation timestamp, RFC 3339 on the wire
    pub created_at: DateTime<Utc>,
}

/// Query parameters for listing notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListQuery {
    /// Page number (1-indexed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    /// Only return unread notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
}

/// Paginated notification list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListResponse {
    /// Notifications for the current page
    pub notifications: Vec<Notification>,
    /// Total notification count for the query
    pub total: i64,
    /// Current page (1-indexed)
    pub page: i64,
    /// Page size
    pub per_page: i64,
    /// Number of unread notifications
    pub unread_count: i64,
}

/// Unread-count endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// Mark-all-read endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadResponse {
    /// Server-side count of notifications marked, which may exceed the
    /// locally cached page
    pub marked_count: i64,
}
