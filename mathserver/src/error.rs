//! MathServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathServerError {
    #[error("Invalid operation")]
    InvalidOperation { name: String },

    #[error("Result not found")]
    ResultNotFound { operation: String },

    #[error("Computation failed: {message}")]
    ComputationFailed { message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl MathServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn computation(message: impl Into<String>) -> Self {
        Self::ComputationFailed {
            message: message.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidOperation { .. } => StatusCode::BAD_REQUEST,
            Self::ResultNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error responses carry a `detail` field with the error's display string,
/// so clients see the same shape for 400, 404 and 500.
impl IntoResponse for MathServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub type MathServerResult<T> = Result<T, MathServerError>;
