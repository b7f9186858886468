//! Request extractors
//!
//! JSON body extractor whose rejection is rendered through [`AppError`],
//! so malformed bodies still receive the `{ success, message }` envelope.

use axum::extract::FromRequest;

use crate::error::app_error::AppError;

/// `axum::Json` with an [`AppError`] rejection (400 + detail)
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
