//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};

const BEARER_SCHEME: &str = "Bearer";

/// Why no usable bearer token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// No Authorization header, or a scheme with an empty token
    #[error("No token, authorization denied")]
    Missing,
    /// Header present but not `Bearer <token>` (or not valid UTF-8)
    #[error("Malformed authorization header")]
    Malformed,
}

/// Extract the bearer token from the `Authorization` header
///
/// The scheme is matched case-insensitively (RFC 7235). Surrounding
/// whitespace around the token is ignored.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?
        .trim();

    if value.is_empty() {
        return Err(BearerError::Missing);
    }

    let (scheme, token) = match value.split_once(' ') {
        Some((scheme, token)) => (scheme, token.trim()),
        None => (value, ""),
    };

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(BearerError::Malformed);
    }

    if token.is_empty() {
        return Err(BearerError::Missing);
    }

    if token.contains(char::is_whitespace) {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
