//! In-Memory Repository Implementations
//!
//! The bookmark store is layered over an [`InMemoryAuthRepository`] so that
//! "user exists" means the same thing for both crates, as with the shared
//! `users` table.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use auth::{InMemoryAuthRepository, UserId};

use crate::domain::entities::{BookmarkList, Campaign};
use crate::domain::repository::{BookmarkRepository, CampaignRepository};
use crate::domain::value_objects::CampaignId;
use crate::error::{BookmarkError, BookmarkResult};

#[derive(Debug, Clone, Default)]
struct StoredList {
    campaign_ids: Vec<CampaignId>,
    version: i64,
}

/// In-memory bookmark repository
#[derive(Clone)]
pub struct InMemoryBookmarkRepository {
    users: InMemoryAuthRepository,
    lists: Arc<Mutex<HashMap<UserId, StoredList>>>,
}

impl InMemoryBookmarkRepository {
    pub fn new(users: InMemoryAuthRepository) -> Self {
        Self {
            users,
            lists: Arc::default(),
        }
    }

    fn user_exists(&self, user_id: &UserId) -> BookmarkResult<bool> {
        self.users
            .contains(user_id)
            .map_err(|e| BookmarkError::Internal(e.to_string()))
    }

    fn lock(&self) -> BookmarkResult<MutexGuard<'_, HashMap<UserId, StoredList>>> {
        self.lists
            .lock()
            .map_err(|_| BookmarkError::Internal("bookmark store poisoned".to_string()))
    }
}

impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn find_list(&self, user_id: &UserId) -> BookmarkResult<Option<BookmarkList>> {
        if !self.user_exists(user_id)? {
            return Ok(None);
        }

        let stored = self.lock()?.get(user_id).cloned().unwrap_or_default();

        Ok(Some(BookmarkList {
            user_id: *user_id,
            campaign_ids: stored.campaign_ids,
            version: stored.version,
        }))
    }

    async fn save_list(&self, list: &BookmarkList) -> BookmarkResult<bool> {
        if !self.user_exists(&list.user_id)? {
            return Ok(false);
        }

        let mut lists = self.lock()?;
        let stored = lists.entry(list.user_id).or_default();

        if stored.version != list.version {
            return Ok(false);
        }

        stored.campaign_ids = list.campaign_ids.clone();
        stored.version += 1;
        Ok(true)
    }
}

/// In-memory campaign repository
#[derive(Clone, Default)]
pub struct InMemoryCampaignRepository {
    campaigns: Arc<Mutex<BTreeMap<CampaignId, Campaign>>>,
}

impl InMemoryCampaignRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a campaign
    pub fn insert(&self, campaign: Campaign) {
        if let Ok(mut campaigns) = self.campaigns.lock() {
            campaigns.insert(campaign.id, campaign);
        }
    }

    fn lock(&self) -> BookmarkResult<MutexGuard<'_, BTreeMap<CampaignId, Campaign>>> {
        self.campaigns
            .lock()
            .map_err(|_| BookmarkError::Internal("campaign store poisoned".to_string()))
    }
}

impl CampaignRepository for InMemoryCampaignRepository {
    async fn exists(&self, campaign_id: CampaignId) -> BookmarkResult<bool> {
        Ok(self.lock()?.contains_key(&campaign_id))
    }

    async fn find_by_ids(&self, ids: &[CampaignId]) -> BookmarkResult<Vec<Campaign>> {
        let campaigns = self.lock()?;
        Ok(ids
            .iter()
            .filter_map(|id| campaigns.get(id).cloned())
            .collect())
    }
}
