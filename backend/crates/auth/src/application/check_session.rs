//! Check Session Use Case
//!
//! Verifies a bearer token and resolves it to a live user.

use std::sync::Arc;

use crate::application::claims::SessionClaims;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{display_name::DisplayName, email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// Identity attached to an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: Email,
    pub name: DisplayName,
}

/// Check session use case
pub struct CheckSessionUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CheckSessionUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Verify `token` and load the user it names
    pub async fn execute(&self, token: &str) -> AuthResult<CurrentUser> {
        let claims: SessionClaims = self.config.token_keys().verify(token)?;

        if claims.iss != self.config.issuer {
            return Err(AuthError::InvalidSession);
        }

        let user_id: UserId = claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidSession)?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(CurrentUser {
            user_id: user.user_id,
            email: user.email,
            name: user.name,
        })
    }
}
