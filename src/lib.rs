//! StudyShare client - typed API wrappers and notification state store.
//!
//! Client-side data-access layer for the StudyShare resource-sharing
//! platform: one wrapper per server endpoint group (auth, comments, likes,
//! ratings, notifications, admin) over a shared HTTP client, plus the
//! notification store that caches server data in memory and exposes derived
//! views and mutating actions to UI code.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use store::NotificationStore;
pub use types::*;
