//! Stateful layer: in-memory caches reconciled against server responses.

mod notification;

pub use notification::{NotificationState, NotificationStore};
