//! Bookmark Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Bookmark-specific result type alias
pub type BookmarkResult<T> = Result<T, BookmarkError>;

/// Bookmark-specific error variants
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Request body failed boundary validation
    #[error("{0}")]
    Validation(AppError),

    /// Body names a user other than the caller
    #[error("You can only change your own bookmarks")]
    Forbidden,

    /// Caller has no user record
    #[error("User not found")]
    UserNotFound,

    /// Campaign does not exist
    #[error("Campaign not found")]
    CampaignNotFound,

    /// Campaign already in the list
    #[error("Campaign already bookmarked")]
    AlreadyBookmarked,

    /// Campaign not in the list
    #[error("Bookmark not found")]
    BookmarkNotFound,

    /// Version check kept failing
    #[error("Bookmarks were changed concurrently, please retry")]
    ConcurrentModification,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookmarkError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookmarkError::Validation(e) => e.kind(),
            BookmarkError::Forbidden => ErrorKind::Forbidden,
            BookmarkError::UserNotFound
            | BookmarkError::CampaignNotFound
            | BookmarkError::BookmarkNotFound => ErrorKind::NotFound,
            BookmarkError::AlreadyBookmarked | BookmarkError::ConcurrentModification => {
                ErrorKind::Conflict
            }
            BookmarkError::Database(_) | BookmarkError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            BookmarkError::Validation(e) => e,
            BookmarkError::ConcurrentModification => {
                AppError::conflict(BookmarkError::ConcurrentModification.to_string())
                    .with_action("Please try again")
            }
            BookmarkError::Database(_) | BookmarkError::Internal(_) => {
                AppError::internal("Internal server Error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BookmarkError::Database(e) => {
                tracing::error!(error = %e, "Bookmark database error");
            }
            BookmarkError::Internal(msg) => {
                tracing::error!(message = %msg, "Bookmark internal error");
            }
            BookmarkError::Forbidden => {
                tracing::warn!("Attempt to change another user's bookmarks");
            }
            BookmarkError::ConcurrentModification => {
                tracing::warn!("Bookmark update lost every version check");
            }
            _ => {
                tracing::debug!(error = %self, "Bookmark error");
            }
        }
    }
}

impl IntoResponse for BookmarkError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for BookmarkError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => BookmarkError::Validation(err),
            _ => BookmarkError::Internal(err.to_string()),
        }
    }
}
