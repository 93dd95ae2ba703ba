//! Error types for the shared crate
//!
//! Standardized domain errors with their HTTP mapping for the dashboard API.

use http::StatusCode;
use thiserror::Error;

use crate::response::ApiResponse;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Malformed input (400)
    InvalidArgument,
    /// Authentication required (401)
    Unauthorized,
    /// Invalid token (401)
    InvalidToken,
    /// Bad credentials (401)
    InvalidCredentials,
    /// Resource not found (404)
    NotFound,
    /// Member cap reached (409)
    CapacityExceeded,
    /// Internal server error (500)
    Internal,
    /// Persistence failure (500)
    Storage,
}

impl ApiErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::CapacityExceeded => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InvalidArgument => "Invalid argument",
            Self::Unauthorized => "Authentication required",
            Self::InvalidToken => "Invalid token",
            Self::InvalidCredentials => "Invalid username or password",
            Self::NotFound => "Resource not found",
            Self::CapacityExceeded => "Member limit reached",
            Self::Internal => "Internal server error",
            Self::Storage => "Storage error",
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::InvalidArgument => "E0001",
            Self::NotFound => "E0002",
            Self::CapacityExceeded => "E0003",
            Self::Unauthorized => "E3001",
            Self::InvalidToken => "E3002",
            Self::InvalidCredentials => "E3003",
            Self::Internal => "E9001",
            Self::Storage => "E9002",
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unified error type for the billing system
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input to a pure function or store operation
    #[error("{message}")]
    InvalidArgument { message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Invalid or expired token
    #[error("Invalid token: {message}")]
    InvalidToken { message: String },

    /// Bad username or password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Resource not found
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Member creation attempted at or beyond the cap
    #[error("Member limit of {limit} has been reached")]
    CapacityExceeded { limit: i64 },

    /// Internal server error
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Underlying persistence failure
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl ApiError {
    // ========== Convenient constructors ==========

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a CapacityExceeded error carrying the limit
    pub fn capacity_exceeded(limit: i64) -> Self {
        Self::CapacityExceeded { limit }
    }

    /// Create an InvalidToken error
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken { message: message.into() }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Create a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage { message: message.into() }
    }

    // ========== Error inspection ==========

    /// Get the error code for this error
    pub fn error_code(&self) -> ApiErrorCode {
        match self {
            Self::InvalidArgument { .. } => ApiErrorCode::InvalidArgument,
            Self::Unauthorized => ApiErrorCode::Unauthorized,
            Self::InvalidToken { .. } => ApiErrorCode::InvalidToken,
            Self::InvalidCredentials => ApiErrorCode::InvalidCredentials,
            Self::NotFound { .. } => ApiErrorCode::NotFound,
            Self::CapacityExceeded { .. } => ApiErrorCode::CapacityExceeded,
            Self::Internal { .. } => ApiErrorCode::Internal,
            Self::Storage { .. } => ApiErrorCode::Storage,
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let code = self.error_code();
        let body = ApiResponse::<()>::error(code.code(), self.to_string());
        (code.status_code(), axum::Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
