//! Typed wrappers, one per server endpoint group.
//!
//! Each wrapper maps a method call to exactly one HTTP request and returns
//! the decoded response body; failures from the shared client are propagated
//! unchanged. No wrapper holds state beyond its `ApiClient` handle.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod like;
pub mod notification;
pub mod rating;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use comment::CommentApi;
pub use like::LikeApi;
pub use notification::{NotificationApi, NotificationEndpoints};
pub use rating::RatingApi;
