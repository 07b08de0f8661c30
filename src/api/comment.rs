//! Comment endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Comment, CommentListQuery, CommentListResponse, CreateCommentRequest};
use tracing::debug;

/// Comment endpoint wrapper.
#[derive(Clone)]
pub struct CommentApi {
    client: ApiClient,
}

impl CommentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List comments on a resource.
    pub async fn list(
        &self,
        resource_id: &str,
        query: &CommentListQuery,
    ) -> Result<CommentListResponse> {
        debug!("Fetching comments for resource {}", resource_id);
        self.client
            .get_query(&format!("/resources/{}/comments", resource_id), query)
            .await
    }

    /// Post a comment on a resource.
    pub async fn create(
        &self,
        resource_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<Comment> {
        debug!("Posting comment on resource {}", resource_id);
        self.client
            .post(&format!("/resources/{}/comments", resource_id), request)
            .await
    }

    /// Delete one of the session user's comments.
    pub async fn delete(&self, comment_id: &str) -> Result<()> {
        debug!("Deleting comment {}", comment_id);
        self.client.delete(&format!("/comments/{}", comment_id)).await
    }
}
