//! Notification endpoints.
//!
//! The store depends on these endpoints through [`NotificationEndpoints`],
//! so tests can substitute a mock transport without a server.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{
    MarkAllReadResponse, Notification, NotificationListQuery, NotificationListResponse,
    UnreadCountResponse,
};
use async_trait::async_trait;
use tracing::debug;

/// The notification endpoint surface the store is written against.
#[async_trait]
pub trait NotificationEndpoints: Send + Sync {
    /// Paginated notification list.
    async fn list(&self, query: &NotificationListQuery) -> Result<NotificationListResponse>;

    /// Mark a single notification as read.
    async fn mark_read(&self, notification_id: &str) -> Result<()>;

    /// Mark every notification as read.
    async fn mark_all_read(&self) -> Result<MarkAllReadResponse>;

    /// Number of unread notifications.
    async fn unread_count(&self) -> Result<UnreadCountResponse>;

    /// High-priority notifications awaiting dismissal.
    async fn priority(&self) -> Result<Vec<Notification>>;

    /// Dismiss a high-priority notification.
    async fn dismiss_priority(&self, notification_id: &str) -> Result<()>;
}

/// Notification endpoint wrapper.
#[derive(Clone)]
pub struct NotificationApi {
    client: ApiClient,
}

impl NotificationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationEndpoints for NotificationApi {
    async fn list(&self, query: &NotificationListQuery) -> Result<NotificationListResponse> {
        debug!("Fetching notifications (page {:?})", query.page);
        self.client.get_query("/notifications", query).await
    }

    async fn mark_read(&self, notification_id: &str) -> Result<()> {
        debug!("Marking notification {} as read", notification_id);
        self.client
            .put_unit(&format!("/notifications/{}/read", notification_id))
            .await
    }

    async fn mark_all_read(&self) -> Result<MarkAllReadResponse> {
        debug!("Marking all notifications as read");
        self.client.put_empty("/notifications/read-all").await
    }

    async fn unread_count(&self) -> Result<UnreadCountResponse> {
        debug!("Fetching unread notification count");
        self.client.get("/notifications/unread-count").await
    }

    async fn priority(&self) -> Result<Vec<Notification>> {
        debug!("Fetching priority notifications");
        self.client.get("/notifications/priority").await
    }

    async fn dismiss_priority(&self, notification_id: &str) -> Result<()> {
        debug!("Dismissing priority notification {}", notification_id);
        self.client
            .put_unit(&format!("/notifications/priority/{}/dismiss", notification_id))
            .await
    }
}
