use thiserror::Error;

/// Client error types.
///
/// Wrappers never retry or reclassify; whatever the transport surfaces is
/// propagated unchanged to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code for protocol-level failures, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
