//! User Entity
//!
//! A registered account: display name, login email and password hash.
//! The bookmark list lives on the same row but is owned by the bookmark
//! crate and never loaded here.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (token subject)
    pub user_id: UserId,
    /// Display name shown in the UI
    pub name: DisplayName,
    /// Login identity, unique across users
    pub email: Email,
    /// Argon2id hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: DisplayName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
