// src/error.rs

//! Unified error handling for the sync connector.

use thiserror::Error;

/// Result type alias for connector operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// A failed page fetch.
///
/// Both source variants of this connector signaled fetch failures
/// differently; everything now flows through this one type and the
/// pagination driver consumes it uniformly.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The API rejected the request with a non-success status.
    #[error("HTTP {code} from API: {body}")]
    Status { code: u16, body: String },

    /// HTTP 429. Kept separate so callers can log a dedicated message;
    /// no backoff is performed.
    #[error("rate limited by API (429): {body}")]
    RateLimited { body: String },

    /// Transport-level failure (DNS, connection refused, timeout) or a
    /// response body that did not decode as JSON.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Page fetch failed
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Document store operation failed
    #[error("store error: {0}")]
    Store(#[from] mongodb::error::Error),

    /// HTTP client construction failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
