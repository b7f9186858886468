//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Signup with display name, email and password
//! - Login by email + password, issuing a 24h HS256 bearer token
//! - `require_session` middleware resolving the bearer to a live user
//!
//! ## Security Model
//! - Passwords hashed with Argon2id on the blocking pool
//! - Unknown email and wrong password produce the same 403 and take the
//!   same time
//! - Tokens are stateless; logout is client-side

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::CurrentUser;
pub use application::config::AuthConfig;
pub use domain::value_object::user_id::UserId;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::middleware::{SessionState, require_session};
pub use presentation::router::auth_router_generic;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
