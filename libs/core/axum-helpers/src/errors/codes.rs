//! Type-safe error codes for API responses.
//!
//! This module provides a single source of truth for error codes used across
//! the application. Each error code includes:
//! - String representation for client consumption (e.g., "NOT_FOUND")
//! - Integer code for logging and monitoring (e.g., 1004)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
///
/// This enum provides a type-safe way to represent error codes across the
/// application. It combines string identifiers (for clients), integer codes
/// (for monitoring), and default messages (for consistency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Invalid UUID format in path or query parameter
    InvalidUuid,

    /// Semantically invalid request input
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state
    Conflict,

    /// JSON extraction from request body failed
    JsonExtraction,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Service is temporarily unavailable
    ServiceUnavailable,

    // I/O errors (4000s)
    /// File system I/O error
    IoError,

    // JSON parsing errors (5000s)
    /// JSON serialization/deserialization error
    SerdeJsonError,
}

impl ErrorCode {
    /// Get the string representation for client consumption.
    ///
    /// This returns a SCREAMING_SNAKE_CASE identifier that clients can use
    /// to programmatically handle specific error types.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidUuid => "INVALID_UUID",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::IoError => "IO_ERROR",
            Self::SerdeJsonError => "SERDE_JSON_ERROR",
        }
    }

    /// Get the integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidUuid => super::messages::CODE_UUID,
            Self::BadRequest => super::messages::CODE_BAD_REQUEST,
            Self::NotFound => super::messages::CODE_NOT_FOUND,
            Self::Conflict => super::messages::CODE_CONFLICT,
            Self::JsonExtraction => super::messages::CODE_JSON_EXTRACTION,
            Self::InternalError => super::messages::CODE_INTERNAL,
            Self::ServiceUnavailable => super::messages::CODE_SERVICE_UNAVAILABLE,
            Self::IoError => super::messages::CODE_IO,
            Self::SerdeJsonError => super::messages::CODE_SERDE_JSON,
        }
    }

    /// Get the default human-readable message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidUuid => super::messages::INVALID_UUID,
            Self::BadRequest => super::messages::BAD_REQUEST,
            Self::NotFound => super::messages::NOT_FOUND_RESOURCE,
            Self::Conflict => super::messages::CONFLICT,
            Self::JsonExtraction => super::messages::INVALID_JSON,
            Self::InternalError => super::messages::INTERNAL_ERROR,
            Self::ServiceUnavailable => super::messages::SERVICE_UNAVAILABLE,
            Self::IoError => super::messages::IO_ERROR,
            Self::SerdeJsonError => super::messages::SERDE_JSON_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::InvalidUuid.as_str(), "INVALID_UUID");
        assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
    }

    #[test]
    fn test_error_code_integers() {
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::InternalError.code(), 1005);
    }

    #[test]
    fn test_error_code_default_messages() {
        assert!(!ErrorCode::NotFound.default_message().is_empty());
        assert!(!ErrorCode::ServiceUnavailable.default_message().is_empty());
    }
}
