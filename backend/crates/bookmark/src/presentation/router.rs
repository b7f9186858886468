//! Bookmark Router
//!
//! Every route sits behind `auth::require_session`.

use auth::{SessionState, domain::repository::UserRepository, require_session};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::BookmarkConfig;
use crate::domain::repository::{BookmarkRepository, CampaignRepository};
use crate::presentation::handlers::{self, BookmarkAppState};

/// Create a generic Bookmark router for any repository implementation
pub fn bookmark_router_generic<B, C, U>(
    bookmarks: B,
    campaigns: C,
    session: SessionState<U>,
    config: BookmarkConfig,
) -> Router
where
    B: BookmarkRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let state = BookmarkAppState {
        bookmarks: Arc::new(bookmarks),
        campaigns: Arc::new(campaigns),
        config: Arc::new(config),
    };

    Router::new()
        .route("/add", post(handlers::add_bookmark::<B, C>))
        .route("/remove", post(handlers::remove_bookmark::<B, C>))
        .route("/all", get(handlers::list_bookmarks::<B, C>))
        .route_layer(from_fn_with_state(session, require_session::<U>))
        .with_state(state)
}
