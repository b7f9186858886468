//! Remove Bookmark Use Case

use std::sync::Arc;

use auth::UserId;

use crate::application::config::BookmarkConfig;
use crate::application::update_list::update_list;
use crate::domain::repository::BookmarkRepository;
use crate::domain::value_objects::CampaignId;
use crate::error::BookmarkResult;

/// Remove Bookmark Use Case
///
/// The campaign itself is not looked up: a bookmark to a campaign that has
/// since disappeared can still be removed.
pub struct RemoveBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    bookmark_repo: Arc<B>,
    config: Arc<BookmarkConfig>,
}

impl<B> RemoveBookmarkUseCase<B>
where
    B: BookmarkRepository,
{
    pub fn new(bookmark_repo: Arc<B>, config: Arc<BookmarkConfig>) -> Self {
        Self {
            bookmark_repo,
            config,
        }
    }

    pub async fn execute(&self, user_id: &UserId, campaign_id: CampaignId) -> BookmarkResult<()> {
        let list = update_list(
            self.bookmark_repo.as_ref(),
            user_id,
            self.config.max_update_attempts,
            |list| list.remove(campaign_id),
        )
        .await?;

        tracing::info!(
            user_id = %user_id,
            campaign_id = %campaign_id,
            bookmarks = list.len(),
            "Bookmark removed"
        );

        Ok(())
    }
}
