//! Router composition

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, SessionState, auth_router_generic};
use axum::{Json, Router, routing::get};
use bookmark::domain::repository::{BookmarkRepository, CampaignRepository};
use bookmark::{BookmarkConfig, bookmark_router_generic};
use kernel::response::MessageResponse;

/// GET /health
async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::ok("Server is running"))
}

/// Build the application router over any set of repositories
///
/// `users` backs both signup/login and the session check on bookmark routes.
pub fn build_app<U, B, C>(
    users: U,
    bookmarks: B,
    campaigns: C,
    auth_config: AuthConfig,
    bookmark_config: BookmarkConfig,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    B: BookmarkRepository + Send + Sync + 'static,
    C: CampaignRepository + Send + Sync + 'static,
{
    let session = SessionState::new(users.clone(), auth_config.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/auth", auth_router_generic(users, auth_config))
        .nest(
            "/bookmarks",
            bookmark_router_generic(bookmarks, campaigns, session, bookmark_config),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::InMemoryAuthRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use bookmark::{InMemoryBookmarkRepository, InMemoryCampaignRepository};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let users = InMemoryAuthRepository::new();
        build_app(
            users.clone(),
            InMemoryBookmarkRepository::new(users),
            InMemoryCampaignRepository::new(),
            AuthConfig::new(b"scenario-secret"),
            BookmarkConfig::default(),
        )
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(&app(), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_signup_login_bookmark_scenario() {
        let app = app();

        let signup = json!({"name": "Ann Lee", "email": "ann@example.com", "password": "hunter22"});
        let (status, _) = send(&app, post_json("/auth/signup", None, signup)).await;
        assert_eq!(status, StatusCode::CREATED);

        let login = json!({"email": "ann@example.com", "password": "hunter22"});
        let (status, body) = send(&app, post_json("/auth/login", None, login)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ann Lee");
        let token = body["token"].as_str().unwrap().to_string();
        assert_eq!(body["jwtToken"], token.as_str());
        let user_id = body["userId"].as_str().unwrap().to_string();

        let req = Request::builder()
            .uri("/bookmarks/all")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let req = Request::builder()
            .uri("/bookmarks/all")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bookmarks"], json!([]));

        let add = json!({"userId": user_id, "campaignId": 42});
        let (status, body) = send(&app, post_json("/bookmarks/add", Some(token.as_str()), add)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Campaign not found");
    }
}
