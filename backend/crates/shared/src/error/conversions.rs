//! Error conversions - HTTP rendering of [`AppError`]
//!
//! Provides the JSON error envelope and conversion from axum's body
//! extraction failures into [`AppError`].

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
use super::app_error::AppError;

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Every response carries `success` and `message`; the SPA only reads those
        // plus `error.details[0].message` for validation failures.
        let body = serde_json::json!({
            "success": false,
            "message": self.message(),
            "error": {
                "kind": self.kind(),
                "status": self.status_code(),
                "action": self.action(),
                "details": self.details(),
            },
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        let detail = rejection.body_text();
        AppError::bad_request("Bad request")
            .with_detail(None, detail)
            .with_source(rejection)
    }
}
