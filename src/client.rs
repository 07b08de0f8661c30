//! Shared HTTP client for all API wrapper groups.
//!
//! Owns the base URL, the underlying connection pool, and the session bearer
//! token. Wrappers build paths and payloads; everything that touches the wire
//! (dispatch, status checking, body decoding) lives here.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Shared REST client.
///
/// Cheap to clone; clones share the connection pool and observe bearer-token
/// updates made through any handle.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(config.base_url));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            token: Arc::new(RwLock::new(config.token)),
        })
    }

    /// Replace the session bearer token (after login).
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Drop the session bearer token (after logout).
    pub fn clear_token(&self) {
        *self.token.write() = None;
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.client.get(self.url(path));
        self.execute(builder).await
    }

    /// GET a path with query parameters and decode the JSON body.
    ///
    /// `None` fields in the query type are omitted from the request entirely.
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let builder = self.client.get(self.url(path)).query(query);
        self.execute(builder).await
    }

    /// POST a JSON body and decode the response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.client.post(self.url(path)).json(body);
        self.execute(builder).await
    }

    /// POST with no body and decode the response.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.client.post(self.url(path));
        self.execute(builder).await
    }

    /// PUT a JSON body and decode the response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.client.put(self.url(path)).json(body);
        self.execute(builder).await
    }

    /// PUT with no body and decode the response.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.client.put(self.url(path));
        self.execute(builder).await
    }

    /// PUT a JSON body, ignoring the response body beyond the status check.
    pub async fn put_ignore<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let builder = self.client.put(self.url(path)).json(body);
        self.execute_unit(builder).await
    }

    /// PUT with no body, ignoring the response body beyond the status check.
    pub async fn put_unit(&self, path: &str) -> Result<()> {
        let builder = self.client.put(self.url(path));
        self.execute_unit(builder).await
    }

    /// DELETE a path, ignoring the response body beyond the status check.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.client.delete(self.url(path));
        self.execute_unit(builder).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.status_error(status, response).await);
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn execute_unit(&self, builder: RequestBuilder) -> Result<()> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.status_error(status, response).await);
        }

        Ok(())
    }

    async fn status_error(&self, status: StatusCode, response: reqwest::Response) -> ApiError {
        let text = response.text().await.unwrap_or_default();
        warn!(
            "API error: {} - {}",
            status,
            &text[..text.len().min(200)]
        );

        ApiError::Status {
            status: status.as_u16(),
            message: server_message(status, &text),
        }
    }
}

/// Pull a human-readable message out of an error body, falling back to the
/// HTTP status text when the server sent nothing usable.
fn server_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return msg.to_string();
                }
            }
        }
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}
