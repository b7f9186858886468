//! PostgreSQL Repository Implementations
//!
//! The bookmark list is the `bookmarks BIGINT[]` column of `users`, guarded
//! by `bookmarks_version`.

use auth::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{BookmarkList, Campaign};
use crate::domain::repository::{BookmarkRepository, CampaignRepository};
use crate::domain::value_objects::CampaignId;
use crate::error::BookmarkResult;

/// PostgreSQL-backed bookmark and campaign repository
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Bookmark Repository Implementation
// ============================================================================

impl BookmarkRepository for PgBookmarkRepository {
    async fn find_list(&self, user_id: &UserId) -> BookmarkResult<Option<BookmarkList>> {
        let row = sqlx::query_as::<_, BookmarkListRow>(
            r#"
            SELECT
                user_id,
                bookmarks,
                bookmarks_version
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookmarkListRow::into_list))
    }

    async fn save_list(&self, list: &BookmarkList) -> BookmarkResult<bool> {
        let ids: Vec<i64> = list.campaign_ids.iter().map(|id| id.value()).collect();

        let updated = sqlx::query(
            r#"
            UPDATE users SET
                bookmarks = $2,
                bookmarks_version = bookmarks_version + 1,
                updated_at = NOW()
            WHERE user_id = $1
              AND bookmarks_version = $3
            "#,
        )
        .bind(list.user_id.as_uuid())
        .bind(&ids)
        .bind(list.version)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated == 1)
    }
}

// ============================================================================
// Campaign Repository Implementation
// ============================================================================

impl CampaignRepository for PgBookmarkRepository {
    async fn exists(&self, campaign_id: CampaignId) -> BookmarkResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM campaigns WHERE campaign_id = $1)",
        )
        .bind(campaign_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_by_ids(&self, ids: &[CampaignId]) -> BookmarkResult<Vec<Campaign>> {
        let ids: Vec<i64> = ids.iter().map(|id| id.value()).collect();

        let rows = sqlx::query_as::<_, CampaignRow>(
            r#"
            SELECT
                campaign_id,
                title,
                purpose,
                story,
                goal,
                end_date,
                image
            FROM campaigns
            WHERE campaign_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CampaignRow::into_campaign).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookmarkListRow {
    user_id: Uuid,
    bookmarks: Vec<i64>,
    bookmarks_version: i64,
}

impl BookmarkListRow {
    fn into_list(self) -> BookmarkList {
        BookmarkList {
            user_id: UserId::from_uuid(self.user_id),
            campaign_ids: self.bookmarks.into_iter().map(CampaignId::from_db).collect(),
            version: self.bookmarks_version,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CampaignRow {
    campaign_id: i64,
    title: String,
    purpose: String,
    story: String,
    goal: f64,
    end_date: DateTime<Utc>,
    image: String,
}

impl CampaignRow {
    fn into_campaign(self) -> Campaign {
        Campaign {
            id: CampaignId::from_db(self.campaign_id),
            title: self.title,
            purpose: self.purpose,
            story: self.story,
            goal: self.goal,
            end_date: self.end_date,
            image: self.image,
        }
    }
}
