//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request body failed boundary validation
    #[error("{0}")]
    Validation(AppError),

    /// Email already registered
    #[error("User is already exist, you can Login")]
    EmailTaken,

    /// Unknown email or wrong password (indistinguishable on purpose)
    #[error("Auth Failed Detail are Wrong")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("No token, authorization denied")]
    Unauthenticated,

    /// Bearer token malformed, forged, or expired
    #[error("Invalid or expired token")]
    InvalidSession,

    /// Token subject no longer resolves to a user
    #[error("User not found")]
    UserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(e) => e.kind(),
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::InvalidCredentials | AuthError::InvalidSession => ErrorKind::Forbidden,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures collapse to a generic message; the detail
    /// only reaches the log.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Validation(e) => e,
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server Error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidSession => {
                tracing::warn!("Rejected invalid session token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::Missing => AuthError::Unauthenticated,
            BearerError::Malformed => AuthError::InvalidSession,
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired | TokenError::Invalid => AuthError::InvalidSession,
            TokenError::Signing(msg) => AuthError::Internal(msg),
        }
    }
}
