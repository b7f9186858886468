//! Login Use Case
//!
//! Authenticates a user by email and password and issues a session token.

use std::sync::Arc;

use chrono::Utc;

use crate::application::claims::SessionClaims;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input (already validated at the boundary)
#[derive(Debug)]
pub struct LoginInput {
    pub email: Email,
    pub password: RawPassword,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token
    pub token: String,
    pub user_id: UserId,
    pub name: String,
    pub email: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let LoginInput { email, password } = input;

        let user = self.user_repo.find_by_email(&email).await?;

        // Unknown email still pays for one full hash verification
        let pepper = self.config.pepper().map(<[u8]>::to_vec);
        let (user, verified) = tokio::task::spawn_blocking(move || {
            let pepper = pepper.as_deref();
            match user {
                Some(user) => {
                    let ok = user.password_hash.verify(&password, pepper);
                    (Some(user), ok)
                }
                None => (None, password.verify_decoy(pepper)),
            }
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))?;

        let user = match (user, verified) {
            (Some(user), true) => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = self.issue_token(&user)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token,
            user_id: user.user_id,
            name: user.name.into_inner(),
            email: user.email.into_db(),
        })
    }

    /// Sign a session token for `user`
    fn issue_token(&self, user: &User) -> AuthResult<String> {
        let claims = SessionClaims::for_user(
            user,
            &self.config.issuer,
            Utc::now().timestamp(),
            self.config.token_ttl_secs(),
        );

        Ok(self.config.token_keys().sign(&claims)?)
    }
}
