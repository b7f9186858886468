//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::token::TokenKeys;

/// Default `iss` claim on issued tokens
pub const DEFAULT_ISSUER: &str = "crowdfund-api";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify session tokens
    pub token_secret: Vec<u8>,
    /// Session token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// `iss` claim written into and required on every token
    pub issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            password_pepper: None,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret.to_vec(),
            ..Default::default()
        }
    }

    /// Create config for development
    ///
    /// Tokens do not survive a restart since the secret is regenerated.
    pub fn development() -> Self {
        Self {
            issuer: format!("{}-dev", DEFAULT_ISSUER),
            ..Self::with_random_secret()
        }
    }

    /// Set the password pepper
    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper;
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Token lifetime in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Signing/verification keys for the configured secret
    pub fn token_keys(&self) -> TokenKeys {
        TokenKeys::from_secret(&self.token_secret)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .field("issuer", &self.issuer)
            .finish()
    }
}
