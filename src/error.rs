/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The site still reports a failed session after a full login attempt
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// Transport failure, propagated as-is
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The response markup no longer matches the documented shape
    #[error("unexpected response shape: {0}")]
    ResponseShape(String),
    /// Caller supplied an invalid value, detected before any request
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Non-success HTTP status
    #[error("unexpected status: {0}")]
    Unexpected(StatusCode),
    /// Filesystem error while persisting the cookie jar
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Cookie jar (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Shorthand for a [`AppError::ResponseShape`] error
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        AppError::ResponseShape(msg.into())
    }

    /// True when the error is the distinct authentication failure
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, AppError::Authentication(_))
    }
}

/// Result alias used across the crate
pub type FtResult<T> = Result<T, AppError>;
