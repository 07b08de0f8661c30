//! Rating types.
//!
//! Scores are integers in 1..=10, validated server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's rating of a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub resource_id: String,
    pub user_id: String,
    pub difficulty: i32,
    pub quality: i32,
    pub detail: i32,
    pub created_at: DateTime<Utc>,
}

/// Aggregated rating statistics for a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub avg_difficulty: Option<f64>,
    pub avg_quality: Option<f64>,
    pub avg_detail: Option<f64>,
    pub rating_count: i64,
}

/// Payload for submitting or updating a rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    pub difficulty: i32,
    pub quality: i32,
    pub detail: i32,
}
