use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API server, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Bearer token to attach to requests, if already authenticated.
    pub token: Option<String>,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with defaults elsewhere.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }

    /// Load configuration from environment variables, picking up a local
    /// `.env` file when present.
    ///
    /// - `STUDYSHARE_API_URL`: base URL (default `http://localhost:8080/api`)
    /// - `STUDYSHARE_API_TIMEOUT_SECS`: request timeout (default 10)
    /// - `STUDYSHARE_API_TOKEN`: bearer token for authenticated sessions
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("STUDYSHARE_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("STUDYSHARE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let token = env::var("STUDYSHARE_API_TOKEN").ok();

        Self {
            base_url: normalize_base_url(base_url),
            timeout_secs,
            token,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the initial bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("https://api.example.com/v1/");
        assert_eq!(config.base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new("https://api.example.com")
            .with_timeout_secs(30)
            .with_token("abc123");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.token.as_deref(), Some("abc123"));
    }
}
