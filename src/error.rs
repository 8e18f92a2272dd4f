//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::constants::{LEGACY_NOT_FOUND, LEGACY_SERVER_ERROR};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors
    #[error("invalid argument: {0}")]
    InvalidInput(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    /// Update target does not exist. The legacy contract reports this as a
    /// bad request, unlike a fetch miss.
    #[error("no problem with pid {0}")]
    UnknownPid(i64),

    /// Fetch target does not exist (legacy 430)
    #[error("problem {0} not found")]
    NotFound(i64),

    // Server errors
    #[error("database error: {0}")]
    Database(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::UnknownPid(_) => "UNKNOWN_PID",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::UnknownPid(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::FORBIDDEN,
            Self::NotFound(_) => legacy_status(LEGACY_NOT_FOUND, StatusCode::NOT_FOUND),
            Self::Database(_) | Self::Internal(_) => {
                legacy_status(LEGACY_SERVER_ERROR, StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Build a non-standard legacy status code, falling back to the nearest
/// registered code if the value is ever rejected.
fn legacy_status(code: u16, fallback: StatusCode) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(fallback)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::UnknownPid(7).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound(7).status_code().as_u16(), 430);
        assert_eq!(
            AppError::Database("boom".into()).status_code().as_u16(),
            599
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::UnknownPid(3).to_string(),
            "no problem with pid 3"
        );
        assert_eq!(AppError::NotFound(3).to_string(), "problem 3 not found");
    }
}
