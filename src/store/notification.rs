//! Notification store.
//!
//! Holds the session's notification cache: the paginated list, the unread
//! counter, and the high-priority subset. Actions call the notification
//! endpoints and patch the cache only after the server confirms, so a failed
//! call leaves the cache in its prior state. Construct one instance at
//! session start and call [`NotificationStore::reset`] at logout.
//!
//! Overlapping fetches are not serialized: if two list fetches are in flight
//! at once, the response that lands last overwrites the cache.

use crate::api::{NotificationApi, NotificationEndpoints};
use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Notification, NotificationListQuery, NotificationListResponse};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

const DEFAULT_PER_PAGE: i64 = 20;

/// Snapshot of the store's cached fields.
#[derive(Debug, Clone)]
pub struct NotificationState {
    /// Cached notifications, in server order, appended to by pagination.
    pub notifications: Vec<Notification>,
    /// Unread counter; server-authoritative, adjusted locally after
    /// confirmed mutations.
    pub unread_count: i64,
    /// High-priority subset awaiting dismissal.
    pub priority_notifications: Vec<Notification>,
    /// Total notifications matching the last list query.
    pub total: i64,
    /// Current page cursor (1-indexed).
    pub page: i64,
    /// Page size.
    pub per_page: i64,
    /// Whether a list fetch is in flight.
    pub loading: bool,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            unread_count: 0,
            priority_notifications: Vec::new(),
            total: 0,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            loading: false,
        }
    }
}

/// Clears the loading flag on every exit path, error and panic included.
struct LoadingGuard {
    state: Arc<Mutex<NotificationState>>,
}

impl LoadingGuard {
    fn acquire(state: &Arc<Mutex<NotificationState>>) -> Self {
        state.lock().loading = true;
        Self {
            state: Arc::clone(state),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.state.lock().loading = false;
    }
}

/// Session-scoped notification cache.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct NotificationStore {
    api: Arc<dyn NotificationEndpoints>,
    state: Arc<Mutex<NotificationState>>,
}

impl NotificationStore {
    /// Create a store over any endpoint implementation.
    pub fn new(api: Arc<dyn NotificationEndpoints>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(NotificationState::default())),
        }
    }

    /// Create a store backed by the real notification endpoints.
    pub fn from_client(client: &ApiClient) -> Self {
        Self::new(Arc::new(NotificationApi::new(client.clone())))
    }

    // ------------------------------------------------------------------
    // Derived views (recomputed on read)
    // ------------------------------------------------------------------

    /// Whether any notification is unread.
    pub fn has_unread(&self) -> bool {
        self.state.lock().unread_count > 0
    }

    /// Whether any high-priority notification is pending.
    pub fn has_priority_notifications(&self) -> bool {
        !self.state.lock().priority_notifications.is_empty()
    }

    /// Unread entries of the cached list.
    pub fn unread_notifications(&self) -> Vec<Notification> {
        self.state
            .lock()
            .notifications
            .iter()
            .filter(|n| !n.is_read)
            .cloned()
            .collect()
    }

    /// Current unread counter.
    pub fn unread_count(&self) -> i64 {
        self.state.lock().unread_count
    }

    /// Whether a list fetch is in flight.
    pub fn loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Full state snapshot.
    pub fn snapshot(&self) -> NotificationState {
        self.state.lock().clone()
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Fetch a page of notifications, replacing the cached list wholesale.
    pub async fn fetch_notifications(
        &self,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        let _loading = LoadingGuard::acquire(&self.state);

        let response = self.api.list(&query).await?;

        {
            let mut state = self.state.lock();
            state.notifications = response.notifications.clone();
            state.total = response.total;
            state.page = response.page;
            state.per_page = response.per_page;
            state.unread_count = response.unread_count;
        }

        debug!(
            "Notification list refreshed: {} cached, {} unread",
            response.notifications.len(),
            response.unread_count
        );
        Ok(response)
    }

    /// Mark a single notification as read, then patch the cache.
    ///
    /// Idempotent against an already-read entry: the counter only moves when
    /// the cached entry actually flips from unread to read.
    pub async fn mark_as_read(&self, notification_id: &str) -> Result<()> {
        self.api.mark_read(notification_id).await?;

        let mut state = self.state.lock();

        let mut flipped = false;
        if let Some(entry) = state
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            if !entry.is_read {
                entry.is_read = true;
                flipped = true;
            }
        }
        if flipped {
            state.unread_count = (state.unread_count - 1).max(0);
        }

        state
            .priority_notifications
            .retain(|n| n.id != notification_id);

        Ok(())
    }

    /// Mark every notification as read.
    ///
    /// Returns the server-side marked count, which may exceed the cached
    /// page.
    pub async fn mark_all_as_read(&self) -> Result<i64> {
        let response = self.api.mark_all_read().await?;

        let mut state = self.state.lock();
        for entry in state.notifications.iter_mut() {
            entry.is_read = true;
        }
        state.unread_count = 0;
        state.priority_notifications.clear();

        Ok(response.marked_count)
    }

    /// Refresh the unread counter from the server.
    pub async fn fetch_unread_count(&self) -> Result<i64> {
        let response = self.api.unread_count().await?;
        self.state.lock().unread_count = response.count;
        Ok(response.count)
    }

    /// Refresh the high-priority subset, replacing it wholesale.
    pub async fn fetch_priority_notifications(&self) -> Result<Vec<Notification>> {
        let notifications = self.api.priority().await?;
        self.state.lock().priority_notifications = notifications.clone();
        Ok(notifications)
    }

    /// Dismiss a high-priority notification.
    ///
    /// Dismissal implies read on the server, so the cached main-list entry is
    /// marked read as well when present and unread.
    pub async fn dismiss_priority(&self, notification_id: &str) -> Result<()> {
        self.api.dismiss_priority(notification_id).await?;

        let mut state = self.state.lock();

        state
            .priority_notifications
            .retain(|n| n.id != notification_id);

        let mut flipped = false;
        if let Some(entry) = state
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            if !entry.is_read {
                entry.is_read = true;
                flipped = true;
            }
        }
        if flipped {
            state.unread_count = (state.unread_count - 1).max(0);
        }

        Ok(())
    }

    /// Fetch the next page and append it to the cached list.
    ///
    /// No-op once the cache already holds `total` entries.
    pub async fn load_more(&self) -> Result<()> {
        let (page, per_page) = {
            let state = self.state.lock();
            if state.notifications.len() as i64 >= state.total {
                return Ok(());
            }
            (state.page, state.per_page)
        };

        let _loading = LoadingGuard::acquire(&self.state);

        let query = NotificationListQuery {
            page: Some(page + 1),
            per_page: Some(per_page),
            unread_only: None,
        };
        let response = self.api.list(&query).await?;

        let mut state = self.state.lock();
        state.notifications.extend(response.notifications);
        state.page = response.page;

        Ok(())
    }

    /// Clear every cached field back to its default. No network call.
    pub fn reset(&self) {
        *self.state.lock() = NotificationState::default();
    }
}
