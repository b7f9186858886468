//! Session Token Claims

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

/// Payload of an issued session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID (UUID string)
    pub sub: String,
    /// Email at issuance
    pub email: String,
    /// Issuer
    pub iss: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for `user`, valid for `ttl_secs` from `now`
    pub fn for_user(user: &User, issuer: &str, now: i64, ttl_secs: i64) -> Self {
        Self {
            sub: user.user_id.to_string(),
            email: user.email.as_str().to_string(),
            iss: issuer.to_string(),
            iat: now,
            exp: now + ttl_secs,
        }
    }
}
