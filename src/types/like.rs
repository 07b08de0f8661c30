//! Like types.

use serde::{Deserialize, Serialize};

/// Current like state of a resource for the session user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub is_liked: bool,
    pub like_count: i64,
}

/// Result of toggling a like.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeToggleResponse {
    pub is_liked: bool,
    pub like_count: i64,
    pub message: String,
}
