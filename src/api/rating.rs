//! Rating endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{CreateRatingRequest, Rating};
use tracing::debug;

/// Rating endpoint wrapper.
#[derive(Clone)]
pub struct RatingApi {
    client: ApiClient,
}

impl RatingApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Submit or update the session user's rating of a resource.
    pub async fn submit(
        &self,
        resource_id: &str,
        request: &CreateRatingRequest,
    ) -> Result<Rating> {
        debug!("Submitting rating for resource {}", resource_id);
        self.client
            .post(&format!("/resources/{}/rate", resource_id), request)
            .await
    }

    /// The session user's rating of a resource, if any.
    pub async fn mine(&self, resource_id: &str) -> Result<Option<Rating>> {
        debug!("Fetching own rating for resource {}", resource_id);
        self.client
            .get(&format!("/resources/{}/rate", resource_id))
            .await
    }

    /// Remove the session user's rating of a resource.
    pub async fn delete(&self, resource_id: &str) -> Result<()> {
        debug!("Deleting rating for resource {}", resource_id);
        self.client
            .delete(&format!("/resources/{}/rate", resource_id))
            .await
    }
}
