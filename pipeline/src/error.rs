//! Pipeline error types

use thiserror::Error;

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Pipeline error types
///
/// There is no retry or recovery: the first error propagates out of `main`
/// and terminates the run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Authentication failed for provider request")]
    AuthenticationFailed,

    #[error("Provider rate limit exceeded")]
    RateLimitExceeded,

    #[error("Provider service unavailable")]
    ServiceUnavailable,

    #[error("Provider request failed: {status}")]
    ProviderError { status: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Document loading failed: {path}: {message}")]
    DocumentLoadError { path: String, message: String },

    #[error("Index error: {message}")]
    IndexError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn index(message: impl Into<String>) -> Self {
        Self::IndexError {
            message: message.into(),
        }
    }
}
