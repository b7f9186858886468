//! In-Memory Repository Implementations
//!
//! Used by the HTTP tests and for running without a database. Clones share
//! the same store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user with this ID is registered
    pub fn contains(&self, user_id: &UserId) -> AuthResult<bool> {
        Ok(self.lock()?.contains_key(user_id))
    }

    /// Delete a user (accounts are never deleted through the API)
    pub fn remove(&self, user_id: &UserId) -> Option<User> {
        self.users.lock().ok()?.remove(user_id)
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, HashMap<UserId, User>>> {
        self.users
            .lock()
            .map_err(|_| AuthError::Internal("user store poisoned".to_string()))
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.lock()?;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.lock()?.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self.lock()?.values().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.lock()?.values().any(|u| &u.email == email))
    }
}
