//! Version-checked list update shared by add and remove

use auth::UserId;

use crate::domain::entities::BookmarkList;
use crate::domain::repository::BookmarkRepository;
use crate::error::{BookmarkError, BookmarkResult};

/// Read, mutate, compare-and-swap; retry on a lost race
///
/// `mutate` runs against a fresh read on every attempt, so its domain
/// checks (duplicate, absent) always see the latest list.
pub(crate) async fn update_list<B, F>(
    repo: &B,
    user_id: &UserId,
    max_attempts: u32,
    mutate: F,
) -> BookmarkResult<BookmarkList>
where
    B: BookmarkRepository,
    F: Fn(&mut BookmarkList) -> BookmarkResult<()> + Send,
{
    for attempt in 1..=max_attempts.max(1) {
        let mut list = repo
            .find_list(user_id)
            .await?
            .ok_or(BookmarkError::UserNotFound)?;

        mutate(&mut list)?;

        if repo.save_list(&list).await? {
            list.version += 1;
            return Ok(list);
        }

        tracing::debug!(user_id = %user_id, attempt, "Bookmark list changed underneath, retrying");
    }

    Err(BookmarkError::ConcurrentModification)
}
