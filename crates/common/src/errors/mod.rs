//! Error types for PaperBlog services
//!
//! Provides:
//! - Distinct error types for different failure modes
//! - HTTP status code mapping
//! - The flat `{"error": ...}` response body
//!
//! Absence of a date or paper is a normal outcome surfaced as a 404
//! variant; storage read/parse failures are fatal and propagate uncaught
//! to the adapter, which converts them to a generic 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Required field missing: {field}")]
    MissingField { field: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    // Resource errors
    #[error("No papers found for date: {date}")]
    DateNotFound { date: String },

    #[error("Paper not found: {id}")]
    PaperNotFound { id: String },

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    // Internal errors
    #[error("Internal server error: {message}")]
    Internal { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::MissingField { .. } | AppError::InvalidFormat { .. } => {
                StatusCode::BAD_REQUEST
            }

            // 404 Not Found
            AppError::DateNotFound { .. } | AppError::PaperNotFound { .. } => {
                StatusCode::NOT_FOUND
            }

            // 500 Internal Server Error
            AppError::Storage(_)
            | AppError::MalformedDocument(_)
            | AppError::Internal { .. }
            | AppError::Configuration { .. }
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Check if this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Check if this error is a client error
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

/// Error response body for the HTTP adapters
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        // Log based on severity
        if self.is_server_error() {
            tracing::error!(error = %message, status = status.as_u16(), "Server error");
        } else if self.is_client_error() {
            tracing::warn!(error = %message, status = status.as_u16(), "Client error");
        }

        // 5xx detail stays in the logs; the wire carries a generic message
        let body = ErrorResponse {
            error: if status.is_server_error() {
                "Internal server error".to_string()
            } else {
                message
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err = AppError::PaperNotFound { id: "2502.00001".into() };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Paper not found: 2502.00001");
    }

    #[test]
    fn test_missing_field_mentions_field() {
        let err = AppError::MissingField { field: "name".into() };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_parse_failure_is_server_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(parse_err);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.is_server_error());
    }
}
