//! Add Bookmark Use Case

use std::sync::Arc;

use auth::UserId;

use crate::application::config::BookmarkConfig;
use crate::application::update_list::update_list;
use crate::domain::repository::{BookmarkRepository, CampaignRepository};
use crate::domain::value_objects::CampaignId;
use crate::error::{BookmarkError, BookmarkResult};

/// Add Bookmark Use Case
pub struct AddBookmarkUseCase<B, C>
where
    B: BookmarkRepository,
    C: CampaignRepository,
{
    bookmark_repo: Arc<B>,
    campaign_repo: Arc<C>,
    config: Arc<BookmarkConfig>,
}

impl<B, C> AddBookmarkUseCase<B, C>
where
    B: BookmarkRepository,
    C: CampaignRepository,
{
    pub fn new(bookmark_repo: Arc<B>, campaign_repo: Arc<C>, config: Arc<BookmarkConfig>) -> Self {
        Self {
            bookmark_repo,
            campaign_repo,
            config,
        }
    }

    pub async fn execute(&self, user_id: &UserId, campaign_id: CampaignId) -> BookmarkResult<()> {
        if !self.campaign_repo.exists(campaign_id).await? {
            return Err(BookmarkError::CampaignNotFound);
        }

        let list = update_list(
            self.bookmark_repo.as_ref(),
            user_id,
            self.config.max_update_attempts,
            |list| list.add(campaign_id),
        )
        .await?;

        tracing::info!(
            user_id = %user_id,
            campaign_id = %campaign_id,
            bookmarks = list.len(),
            "Bookmark added"
        );

        Ok(())
    }
}
