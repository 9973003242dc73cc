//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses with
//! appropriate HTTP status codes. Two deliberate conflations live here:
//! every authentication failure (missing/bad/expired token, vanished
//! subject) renders as one fixed UNAUTHENTICATED body, and login
//! failures never say which factor was wrong.

use todo_auth::AuthError;
use todo_core::CoreError;
use todo_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "EMAIL_TAKEN", "FORBIDDEN")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request shape (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Signup with an email that already has an account (409)
    #[error("Email already registered {location}")]
    EmailTaken { location: ErrorLocation },

    /// Login failure; unknown email and wrong password are
    /// indistinguishable by design (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Missing/malformed/expired token, or its subject no longer
    /// exists (401)
    #[error("Unauthenticated: {detail} {location}")]
    Unauthenticated {
        /// Internal detail, logged but never sent to the client
        detail: String,
        location: ErrorLocation,
    },

    /// Authenticated but not the resource owner (403)
    #[error("Forbidden {location}")]
    Forbidden { location: ErrorLocation },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Identity store unreachable (503); distinct from Unauthenticated
    /// so outages are never mistaken for bad credentials
    #[error("Store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::EmailTaken { .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "EMAIL_TAKEN".into(),
                    message: "Email already registered. Please use a different email or log in."
                        .into(),
                    field: Some("email".into()),
                },
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: "Invalid email or password.".into(),
                    field: None,
                },
            ),
            // One fixed body for every flavor of authentication failure;
            // the variant detail stays in the log line above.
            ApiError::Unauthenticated { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHENTICATED".into(),
                    message: "Invalid or expired authentication token. Please log in again."
                        .into(),
                    field: None,
                },
            ),
            ApiError::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "FORBIDDEN".into(),
                    message: "Cannot access another user's data.".into(),
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::StoreUnavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "STORE_UNAVAILABLE".into(),
                    message: "Service temporarily unavailable. Please retry.".into(),
                    field: None,
                },
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: "Internal server error.".into(),
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert auth-core errors to API errors. The 401 partition is owned
/// by [`AuthError::is_unauthenticated`]; only the non-401 variants are
/// matched individually here.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if e.is_unauthenticated() {
            return ApiError::Unauthenticated {
                detail: e.to_string(),
                location,
            };
        }

        match e {
            AuthError::Forbidden { .. } => ApiError::Forbidden { location },
            AuthError::StoreUnavailable { message, .. } => {
                ApiError::StoreUnavailable { message, location }
            }
            // Hashing and Signing; their Display output carries the detail
            other => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        if e.is_unavailable() {
            ApiError::StoreUnavailable {
                message: "database unreachable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message().to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Blocking-pool join failures (password hashing runs there)
impl From<tokio::task::JoinError> for ApiError {
    #[track_caller]
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal {
            message: format!("Background task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
