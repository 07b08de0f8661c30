//! Authentication endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
use tracing::debug;

/// Auth endpoint wrapper.
///
/// Login and register update the shared client's bearer token on success;
/// logout clears it. The refresh flow relies on an HttpOnly cookie held by
/// the server, so no token is sent from here.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register a new account and start a session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        debug!("Registering user {}", request.user_name);
        let response: AuthResponse = self.client.post("/auth/register", request).await?;
        self.client.set_token(response.token.clone());
        Ok(response)
    }

    /// Log in and start a session.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        debug!("Logging in {}", request.email);
        let response: AuthResponse = self.client.post("/auth/login", request).await?;
        self.client.set_token(response.token.clone());
        Ok(response)
    }

    /// Refresh the session token.
    pub async fn refresh_token(&self) -> Result<MessageResponse> {
        debug!("Refreshing session token");
        self.client.post_empty("/auth/refresh").await
    }

    /// End the session.
    pub async fn logout(&self) -> Result<MessageResponse> {
        debug!("Logging out");
        let response = self.client.post_empty("/auth/logout").await?;
        self.client.clear_token();
        Ok(response)
    }
}
