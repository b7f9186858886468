//! HTTP Handlers

use auth::CurrentUser;
use axum::Json;
use axum::extract::State;
use kernel::extract::JsonBody;
use kernel::response::MessageResponse;
use std::sync::Arc;

use crate::application::{
    AddBookmarkUseCase, BookmarkConfig, ListBookmarksUseCase, RemoveBookmarkUseCase,
};
use crate::domain::repository::{BookmarkRepository, CampaignRepository};
use crate::error::BookmarkResult;
use crate::presentation::dto::{BookmarkRequest, BookmarksResponse};

/// Shared state for bookmark handlers
pub struct BookmarkAppState<B, C>
where
    B: BookmarkRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
{
    pub bookmarks: Arc<B>,
    pub campaigns: Arc<C>,
    pub config: Arc<BookmarkConfig>,
}

impl<B, C> Clone for BookmarkAppState<B, C>
where
    B: BookmarkRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            bookmarks: self.bookmarks.clone(),
            campaigns: self.campaigns.clone(),
            config: self.config.clone(),
        }
    }
}

/// POST /bookmarks/add
pub async fn add_bookmark<B, C>(
    State(state): State<BookmarkAppState<B, C>>,
    current_user: CurrentUser,
    JsonBody(req): JsonBody<BookmarkRequest>,
) -> BookmarkResult<Json<MessageResponse>>
where
    B: BookmarkRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
{
    let command = req.into_command(&current_user)?;

    let use_case = AddBookmarkUseCase::new(
        state.bookmarks.clone(),
        state.campaigns.clone(),
        state.config.clone(),
    );
    use_case
        .execute(&current_user.user_id, command.campaign_id)
        .await?;

    Ok(Json(MessageResponse::ok("Campaign bookmarked successfully")))
}

/// POST /bookmarks/remove
pub async fn remove_bookmark<B, C>(
    State(state): State<BookmarkAppState<B, C>>,
    current_user: CurrentUser,
    JsonBody(req): JsonBody<BookmarkRequest>,
) -> BookmarkResult<Json<MessageResponse>>
where
    B: BookmarkRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
{
    let command = req.into_command(&current_user)?;

    let use_case = RemoveBookmarkUseCase::new(state.bookmarks.clone(), state.config.clone());
    use_case
        .execute(&current_user.user_id, command.campaign_id)
        .await?;

    Ok(Json(MessageResponse::ok("Bookmark removed successfully")))
}

/// GET /bookmarks/all
pub async fn list_bookmarks<B, C>(
    State(state): State<BookmarkAppState<B, C>>,
    current_user: CurrentUser,
) -> BookmarkResult<Json<BookmarksResponse>>
where
    B: BookmarkRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
{
    let use_case = ListBookmarksUseCase::new(state.bookmarks.clone(), state.campaigns.clone());
    let campaigns = use_case.execute(&current_user.user_id).await?;

    Ok(Json(BookmarksResponse::new(campaigns)))
}
