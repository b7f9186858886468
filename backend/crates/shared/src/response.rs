//! Success Envelope
//!
//! The client checks `success` and shows `message` in a toast, so every
//! successful response starts from this shape.

use serde::Serialize;

/// `{ "success": true, "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Successful acknowledgement with a human-readable message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
