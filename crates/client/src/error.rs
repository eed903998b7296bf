//! Error type for catalog REST calls

use thiserror::Error;

/// Errors that can occur when calling the catalog service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connect, DNS, TLS, ...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    /// The response body did not match the expected record shape.
    #[error("Failed to parse response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The configured base URL cannot be used.
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Result alias for catalog REST calls.
pub type ClientResult<T> = Result<T, ClientError>;
