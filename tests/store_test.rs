//! Unit tests for the notification store's cache reconciliation.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use studyshare_client::api::NotificationEndpoints;
use studyshare_client::error::{ApiError, Result};
use studyshare_client::types::{
    MarkAllReadResponse, Notification, NotificationListQuery, NotificationListResponse,
    NotificationPriority, NotificationType, UnreadCountResponse,
};
use studyshare_client::NotificationStore;

fn notification(id: &str, is_read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        recipient_id: Some("u1".to_string()),
        title: format!("Notification {}", id),
        content: "body".to_string(),
        notification_type: NotificationType::System,
        priority: NotificationPriority::Normal,
        is_read,
        link_url: None,
        created_at: "2024-03-01T12:00:00Z".parse().unwrap(),
    }
}

fn list_response(
    notifications: Vec<Notification>,
    total: i64,
    page: i64,
    unread_count: i64,
) -> NotificationListResponse {
    NotificationListResponse {
        notifications,
        total,
        page,
        per_page: 20,
        unread_count,
    }
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

/// Scripted endpoint stand-in: queued list responses, per-method failure
/// switches, and call recording.
#[derive(Default)]
struct MockApi {
    list_responses: Mutex<VecDeque<Result<NotificationListResponse>>>,
    list_queries: Mutex<Vec<NotificationListQuery>>,
    marked: Mutex<Vec<String>>,
    dismissed: Mutex<Vec<String>>,
    fail_mark_read: bool,
    fail_mark_all: bool,
    fail_dismiss: bool,
    marked_count: i64,
    unread_count: i64,
    priority: Mutex<Vec<Notification>>,
}

impl MockApi {
    fn push_list(&self, response: Result<NotificationListResponse>) {
        self.list_responses.lock().push_back(response);
    }

    fn list_calls(&self) -> usize {
        self.list_queries.lock().len()
    }
}

#[async_trait]
impl NotificationEndpoints for MockApi {
    async fn list(&self, query: &NotificationListQuery) -> Result<NotificationListResponse> {
        self.list_queries.lock().push(query.clone());
        self.list_responses
            .lock()
            .pop_front()
            .expect("unexpected list call")
    }

    async fn mark_read(&self, notification_id: &str) -> Result<()> {
        if self.fail_mark_read {
            return Err(server_error());
        }
        self.marked.lock().push(notification_id.to_string());
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<MarkAllReadResponse> {
        if self.fail_mark_all {
            return Err(server_error());
        }
        Ok(MarkAllReadResponse {
            marked_count: self.marked_count,
        })
    }

    async fn unread_count(&self) -> Result<UnreadCountResponse> {
        Ok(UnreadCountResponse {
            count: self.unread_count,
        })
    }

    async fn priority(&self) -> Result<Vec<Notification>> {
        Ok(self.priority.lock().clone())
    }

    async fn dismiss_priority(&self, notification_id: &str) -> Result<()> {
        if self.fail_dismiss {
            return Err(server_error());
        }
        self.dismissed.lock().push(notification_id.to_string());
        Ok(())
    }
}

/// Store pre-loaded with one page of notifications.
async fn seeded_store(
    api: Arc<MockApi>,
    notifications: Vec<Notification>,
    total: i64,
    unread_count: i64,
) -> NotificationStore {
    api.push_list(Ok(list_response(notifications, total, 1, unread_count)));
    let store = NotificationStore::new(api);
    store
        .fetch_notifications(NotificationListQuery::default())
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_fetch_replaces_state_wholesale() {
    let api = Arc::new(MockApi::default());
    api.push_list(Ok(list_response(
        vec![notification("a", false), notification("b", true)],
        5,
        1,
        3,
    )));

    let store = NotificationStore::new(api);
    let response = store
        .fetch_notifications(NotificationListQuery::default())
        .await
        .unwrap();

    assert_eq!(response.total, 5);

    let state = store.snapshot();
    assert_eq!(state.notifications.len(), 2);
    assert_eq!(state.total, 5);
    assert_eq!(state.page, 1);
    assert_eq!(state.per_page, 20);
    assert_eq!(state.unread_count, 3);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_fetch_failure_releases_loading_and_keeps_state() {
    let api = Arc::new(MockApi::default());
    let store = seeded_store(Arc::clone(&api), vec![notification("a", false)], 1, 1).await;

    api.push_list(Err(server_error()));
    let result = store
        .fetch_notifications(NotificationListQuery::default())
        .await;

    assert!(matches!(
        result,
        Err(ApiError::Status { status: 500, .. })
    ));

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.unread_count, 1);
}

#[tokio::test]
async fn test_mark_as_read_patches_entry_and_counter() {
    let api = Arc::new(MockApi::default());
    let store = seeded_store(Arc::clone(&api), vec![notification("a", false)], 1, 1).await;

    store.mark_as_read("a").await.unwrap();

    let state = store.snapshot();
    assert!(state.notifications[0].is_read);
    assert_eq!(state.unread_count, 0);
    assert_eq!(api.marked.lock().as_slice(), ["a"]);
}

#[tokio::test]
async fn test_mark_as_read_is_idempotent_locally() {
    let api = Arc::new(MockApi::default());
    let store = seeded_store(
        Arc::clone(&api),
        vec![notification("a", false), notification("b", false)],
        2,
        2,
    )
    .await;

    store.mark_as_read("a").await.unwrap();
    store.mark_as_read("a").await.unwrap();

    // Second call finds the entry already read and leaves the counter alone.
    assert_eq!(store.unread_count(), 1);
}

#[tokio::test]
async fn test_mark_as_read_removes_from_priority_list() {
    let api = Arc::new(MockApi::default());
    *api.priority.lock() = vec![notification("a", false), notification("b", false)];

    let store = seeded_store(Arc::clone(&api), vec![notification("a", false)], 1, 1).await;
    store.fetch_priority_notifications().await.unwrap();
    assert!(store.has_priority_notifications());

    store.mark_as_read("a").await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.priority_notifications.len(), 1);
    assert_eq!(state.priority_notifications[0].id, "b");
}

#[tokio::test]
async fn test_mark_as_read_failure_leaves_cache_untouched() {
    let api = Arc::new(MockApi {
        fail_mark_read: true,
        ..Default::default()
    });
    let store = seeded_store(Arc::clone(&api), vec![notification("a", false)], 1, 1).await;

    let result = store.mark_as_read("a").await;
    assert!(result.is_err());

    let state = store.snapshot();
    assert!(!state.notifications[0].is_read);
    assert_eq!(state.unread_count, 1);
}

#[tokio::test]
async fn test_mark_all_as_read() {
    let api = Arc::new(MockApi {
        marked_count: 12,
        ..Default::default()
    });
    *api.priority.lock() = vec![notification("a", false)];

    let store = seeded_store(
        Arc::clone(&api),
        vec![notification("a", false), notification("b", true)],
        12,
        7,
    )
    .await;
    store.fetch_priority_notifications().await.unwrap();

    // The server may mark more than the cached page holds.
    let marked = store.mark_all_as_read().await.unwrap();
    assert_eq!(marked, 12);

    let state = store.snapshot();
    assert!(state.notifications.iter().all(|n| n.is_read));
    assert_eq!(state.unread_count, 0);
    assert!(state.priority_notifications.is_empty());
}

#[tokio::test]
async fn test_fetch_unread_count_overwrites_local_value() {
    let api = Arc::new(MockApi {
        unread_count: 7,
        ..Default::default()
    });
    let store = NotificationStore::new(api);

    let count = store.fetch_unread_count().await.unwrap();
    assert_eq!(count, 7);
    assert_eq!(store.unread_count(), 7);
}

#[tokio::test]
async fn test_fetch_priority_replaces_wholesale() {
    let api = Arc::new(MockApi::default());
    *api.priority.lock() = vec![notification("p1", false)];

    let store = NotificationStore::new(Arc::clone(&api) as Arc<dyn NotificationEndpoints>);
    store.fetch_priority_notifications().await.unwrap();
    assert_eq!(store.snapshot().priority_notifications.len(), 1);

    *api.priority.lock() = vec![notification("p2", false), notification("p3", false)];
    store.fetch_priority_notifications().await.unwrap();

    let priority = store.snapshot().priority_notifications;
    assert_eq!(priority.len(), 2);
    assert!(priority.iter().all(|n| n.id != "p1"));
}

#[tokio::test]
async fn test_dismiss_priority_couples_removal_and_read() {
    let api = Arc::new(MockApi::default());
    *api.priority.lock() = vec![notification("a", false)];

    let store = seeded_store(
        Arc::clone(&api),
        vec![notification("a", false), notification("b", false)],
        2,
        2,
    )
    .await;
    store.fetch_priority_notifications().await.unwrap();

    store.dismiss_priority("a").await.unwrap();

    let state = store.snapshot();
    assert!(state.priority_notifications.is_empty());
    assert!(state.notifications[0].is_read);
    assert_eq!(state.unread_count, 1);
    assert_eq!(api.dismissed.lock().as_slice(), ["a"]);
}

#[tokio::test]
async fn test_dismiss_priority_unknown_id_changes_nothing() {
    let api = Arc::new(MockApi::default());
    let store = seeded_store(Arc::clone(&api), vec![notification("a", true)], 1, 0).await;

    store.dismiss_priority("missing").await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.unread_count, 0);
    assert!(state.priority_notifications.is_empty());
}

#[tokio::test]
async fn test_dismiss_priority_failure_leaves_cache_untouched() {
    let api = Arc::new(MockApi {
        fail_dismiss: true,
        ..Default::default()
    });
    *api.priority.lock() = vec![notification("a", false)];

    let store = seeded_store(Arc::clone(&api), vec![notification("a", false)], 1, 1).await;
    store.fetch_priority_notifications().await.unwrap();

    assert!(store.dismiss_priority("a").await.is_err());

    let state = store.snapshot();
    assert_eq!(state.priority_notifications.len(), 1);
    assert!(!state.notifications[0].is_read);
    assert_eq!(state.unread_count, 1);
}

#[tokio::test]
async fn test_load_more_is_noop_when_fully_loaded() {
    let api = Arc::new(MockApi::default());
    let store = seeded_store(Arc::clone(&api), vec![notification("a", true)], 1, 0).await;
    let calls_before = api.list_calls();

    store.load_more().await.unwrap();

    assert_eq!(api.list_calls(), calls_before);
    assert_eq!(store.snapshot().notifications.len(), 1);
}

#[tokio::test]
async fn test_load_more_appends_next_page() {
    let api = Arc::new(MockApi::default());
    let first_page: Vec<Notification> =
        (0..20).map(|i| notification(&format!("a{}", i), true)).collect();
    let store = seeded_store(Arc::clone(&api), first_page, 50, 0).await;

    let second_page: Vec<Notification> =
        (0..20).map(|i| notification(&format!("b{}", i), true)).collect();
    api.push_list(Ok(list_response(second_page, 50, 2, 0)));

    store.load_more().await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.notifications.len(), 40);
    assert_eq!(state.page, 2);
    assert!(!state.loading);

    // The follow-up request asked for the next page with the current size.
    let queries = api.list_queries.lock();
    let query = queries.last().unwrap();
    assert_eq!(query.page, Some(2));
    assert_eq!(query.per_page, Some(20));
    assert_eq!(query.unread_only, None);
}

#[tokio::test]
async fn test_load_more_failure_releases_loading() {
    let api = Arc::new(MockApi::default());
    let store = seeded_store(Arc::clone(&api), vec![notification("a", true)], 5, 0).await;

    api.push_list(Err(server_error()));
    assert!(store.load_more().await.is_err());

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.notifications.len(), 1);
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let api = Arc::new(MockApi::default());
    *api.priority.lock() = vec![notification("a", false)];

    let store = seeded_store(Arc::clone(&api), vec![notification("a", false)], 40, 5).await;
    store.fetch_priority_notifications().await.unwrap();

    store.reset();

    let state = store.snapshot();
    assert!(state.notifications.is_empty());
    assert_eq!(state.unread_count, 0);
    assert!(state.priority_notifications.is_empty());
    assert_eq!(state.total, 0);
    assert_eq!(state.page, 1);
    assert!(!state.loading);
}
