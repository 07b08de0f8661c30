//! Like endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{LikeStatus, LikeToggleResponse};
use tracing::debug;

/// Like endpoint wrapper.
#[derive(Clone)]
pub struct LikeApi {
    client: ApiClient,
}

impl LikeApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Toggle the session user's like on a resource.
    pub async fn toggle(&self, resource_id: &str) -> Result<LikeToggleResponse> {
        debug!("Toggling like on resource {}", resource_id);
        self.client
            .post_empty(&format!("/resources/{}/like", resource_id))
            .await
    }

    /// Current like state of a resource.
    pub async fn status(&self, resource_id: &str) -> Result<LikeStatus> {
        debug!("Fetching like status for resource {}", resource_id);
        self.client
            .get(&format!("/resources/{}/like", resource_id))
            .await
    }
}
