//! Errors returned by [`UsersApi`](crate::UsersApi) calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no bearer token available")]
    MissingToken,

    #[error("invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("users service responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("user {0} not found")]
    NotFound(String),
}

impl ApiError {
    /// Whether the service rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::MissingToken | ApiError::Status { status: 401 | 403, .. })
    }
}

/// Borrow a usable bearer token, treating blank tokens as missing.
pub fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
    match token.map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(ApiError::MissingToken),
    }
}
