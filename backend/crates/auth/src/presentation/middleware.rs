//! Auth Middleware
//!
//! Middleware for requiring a bearer session on protected routes, and the
//! extractor handlers use to read the resolved identity.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, CurrentUser};
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Middleware state
pub struct SessionState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<AuthConfig>,
}

impl<U> SessionState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: U, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

impl<U> Clone for SessionState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

/// Middleware that requires a valid bearer session
///
/// Missing token is 401; a malformed, forged or expired token is 403; a
/// valid token whose user is gone is 404. On success the [`CurrentUser`]
/// is stored in the request extensions.
pub async fn require_session<U>(
    State(state): State<SessionState<U>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    U: UserRepository + Send + Sync + 'static,
{
    let token = extract_bearer_token(req.headers())?.to_owned();

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let current_user = use_case.execute(&token).await?;

    tracing::debug!(user_id = %current_user.user_id, "Session verified");

    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }
}
