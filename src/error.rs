use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied a value outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Lookup target does not exist
    #[error("Not found: {0}")]
    NotFound(String),
    /// Operation collides with one already in flight
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ConfigError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::ConfigError(_) => "config_error",
            Self::InternalError(_) => "internal_error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::ConfigError(msg)
            | Self::InternalError(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        crate::metrics::record_error(self.type_name());

        let body = Json(json!({
            "error": {
                "message": self.message(),
                "type": self.type_name(),
            }
        }));

        (self.status(), body).into_response()
    }
}
