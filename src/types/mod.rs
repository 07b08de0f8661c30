//! Wire types shared between the API wrappers and their callers.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod like;
pub mod notification;
pub mod rating;

pub use admin::*;
pub use auth::*;
pub use comment::*;
pub use like::*;
pub use notification::*;
pub use rating::*;
