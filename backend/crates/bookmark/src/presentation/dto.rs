//! API DTOs (Data Transfer Objects)

use auth::{CurrentUser, UserId};
use chrono::{DateTime, Utc};
use kernel::error::app_error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::Campaign;
use crate::domain::value_objects::CampaignId;
use crate::error::{BookmarkError, BookmarkResult};

// ============================================================================
// Add / Remove
// ============================================================================

/// Add/remove request
///
/// Both fields arrive loosely typed from the SPA: `campaignId` may be a
/// number or a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRequest {
    pub user_id: Option<Value>,
    pub campaign_id: Option<Value>,
}

/// Validated add/remove command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkCommand {
    pub campaign_id: CampaignId,
}

impl BookmarkRequest {
    /// Validate against the authenticated caller
    ///
    /// A `userId` in the body is optional; when present it must name the
    /// caller.
    pub fn into_command(self, caller: &CurrentUser) -> BookmarkResult<BookmarkCommand> {
        let campaign_id = parse_campaign_id(self.campaign_id)?;

        match self.user_id {
            None | Some(Value::Null) => {}
            Some(value) => {
                let user_id = parse_user_id(&value)?;
                if user_id != caller.user_id {
                    return Err(BookmarkError::Forbidden);
                }
            }
        }

        Ok(BookmarkCommand { campaign_id })
    }
}

fn parse_campaign_id(value: Option<Value>) -> BookmarkResult<CampaignId> {
    let invalid = || AppError::validation("campaignId", "\"campaignId\" must be a valid campaign id");

    let raw = match value {
        None | Some(Value::Null) => {
            return Err(AppError::validation("campaignId", "\"campaignId\" is required").into());
        }
        Some(Value::Number(n)) => n.as_i64().ok_or_else(invalid)?,
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        Some(_) => return Err(invalid().into()),
    };

    CampaignId::new(raw).ok_or_else(|| invalid().into())
}

fn parse_user_id(value: &Value) -> BookmarkResult<UserId> {
    value
        .as_str()
        .and_then(|s| s.parse::<UserId>().ok())
        .ok_or_else(|| AppError::validation("userId", "\"userId\" must be a valid GUID").into())
}

// ============================================================================
// List
// ============================================================================

/// Campaign as the SPA renders it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: i64,
    pub title: String,
    pub purpose: String,
    pub story: String,
    pub goal: f64,
    pub end_date: DateTime<Utc>,
    pub image: String,
}

impl From<Campaign> for CampaignResponse {
    fn from(c: Campaign) -> Self {
        Self {
            id: c.id.value(),
            title: c.title,
            purpose: c.purpose,
            story: c.story,
            goal: c.goal,
            end_date: c.end_date,
            image: c.image,
        }
    }
}

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct BookmarksResponse {
    pub success: bool,
    pub message: String,
    pub bookmarks: Vec<CampaignResponse>,
}

impl BookmarksResponse {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self {
            success: true,
            message: "Bookmarks fetched successfully".to_string(),
            bookmarks: campaigns.into_iter().map(CampaignResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::domain::value_object::{display_name::DisplayName, email::Email};
    use serde_json::json;

    fn caller() -> CurrentUser {
        CurrentUser {
            user_id: UserId::new(),
            email: Email::new("ann@example.com").unwrap(),
            name: DisplayName::new("Ann Lee").unwrap(),
        }
    }

    fn request(body: Value) -> BookmarkRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_campaign_id_number_or_string() {
        let me = caller();
        let cmd = request(json!({"campaignId": 42})).into_command(&me).unwrap();
        assert_eq!(cmd.campaign_id.value(), 42);

        let cmd = request(json!({"campaignId": "7"})).into_command(&me).unwrap();
        assert_eq!(cmd.campaign_id.value(), 7);

        let cmd = request(json!({"campaignId": 0})).into_command(&me).unwrap();
        assert_eq!(cmd.campaign_id.value(), 0);
    }

    #[test]
    fn test_campaign_id_invalid() {
        let me = caller();
        for body in [
            json!({}),
            json!({"campaignId": null}),
            json!({"campaignId": -1}),
            json!({"campaignId": 1.5}),
            json!({"campaignId": "abc"}),
            json!({"campaignId": [1]}),
        ] {
            let err = request(body).into_command(&me).unwrap_err();
            assert!(matches!(err, BookmarkError::Validation(_)));
        }
    }

    #[test]
    fn test_user_id_must_match_caller() {
        let me = caller();

        let mine = json!({"userId": me.user_id.to_string(), "campaignId": 1});
        assert!(request(mine).into_command(&me).is_ok());

        let theirs = json!({"userId": UserId::new().to_string(), "campaignId": 1});
        assert!(matches!(
            request(theirs).into_command(&me),
            Err(BookmarkError::Forbidden)
        ));

        let garbage = json!({"userId": 17, "campaignId": 1});
        assert!(matches!(
            request(garbage).into_command(&me),
            Err(BookmarkError::Validation(_))
        ));
    }

    #[test]
    fn test_campaign_response_shape() {
        let campaign = Campaign {
            id: CampaignId::new(3).unwrap(),
            title: "Clean Water".into(),
            purpose: "Wells".into(),
            story: "...".into(),
            goal: 2.5,
            end_date: DateTime::parse_from_rfc3339("2030-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            image: "https://example.com/w.png".into(),
        };
        let json = serde_json::to_value(CampaignResponse::from(campaign)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["endDate"], "2030-01-01T00:00:00Z");
        assert_eq!(json["goal"], 2.5);
    }
}
