//! Domain Entities
//!
//! Core business entities for the bookmark domain.

use auth::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::CampaignId;
use crate::error::{BookmarkError, BookmarkResult};

/// A user's ordered, duplicate-free bookmark list
///
/// `version` is the value read from storage; a save only succeeds while the
/// stored version still equals it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkList {
    pub user_id: UserId,
    pub campaign_ids: Vec<CampaignId>,
    pub version: i64,
}

impl BookmarkList {
    /// Empty list for a user that has never bookmarked anything
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            campaign_ids: Vec::new(),
            version: 0,
        }
    }

    pub fn contains(&self, campaign_id: CampaignId) -> bool {
        self.campaign_ids.contains(&campaign_id)
    }

    /// Append, keeping insertion order
    pub fn add(&mut self, campaign_id: CampaignId) -> BookmarkResult<()> {
        if self.contains(campaign_id) {
            return Err(BookmarkError::AlreadyBookmarked);
        }
        self.campaign_ids.push(campaign_id);
        Ok(())
    }

    /// Remove the matching entry
    pub fn remove(&mut self, campaign_id: CampaignId) -> BookmarkResult<()> {
        let position = self
            .campaign_ids
            .iter()
            .position(|id| *id == campaign_id)
            .ok_or(BookmarkError::BookmarkNotFound)?;
        self.campaign_ids.remove(position);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.campaign_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaign_ids.is_empty()
    }
}

/// Campaign reference data, as stored in the campaign collection
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub purpose: String,
    pub story: String,
    /// Funding goal in ETH
    pub goal: f64,
    pub end_date: DateTime<Utc>,
    /// Image URL
    pub image: String,
}
