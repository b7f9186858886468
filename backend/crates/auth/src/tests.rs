//! Unit and HTTP tests for the auth crate

#[cfg(test)]
mod fixtures {
    use std::sync::Arc;

    use crate::application::{AuthConfig, SignUpInput, SignUpUseCase};
    use crate::domain::value_object::{
        display_name::DisplayName, email::Email, user_id::UserId, user_password::RawPassword,
    };
    use crate::infra::InMemoryAuthRepository;

    pub const SECRET: &[u8] = b"test-secret";

    pub fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::new(SECRET))
    }

    pub fn signup_input(name: &str, email: &str, password: &str) -> SignUpInput {
        SignUpInput {
            name: DisplayName::new(name).unwrap(),
            email: Email::new(email).unwrap(),
            password: RawPassword::new(password.to_string()).unwrap(),
        }
    }

    pub async fn register(
        repo: &Arc<InMemoryAuthRepository>,
        config: &Arc<AuthConfig>,
        email: &str,
        password: &str,
    ) -> UserId {
        SignUpUseCase::new(repo.clone(), config.clone())
            .execute(signup_input("Ann Lee", email, password))
            .await
            .unwrap()
            .user_id
    }
}

#[cfg(test)]
mod sign_up_tests {
    use std::sync::Arc;

    use super::fixtures::*;
    use crate::application::SignUpUseCase;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::user_password::RawPassword;
    use crate::error::AuthError;
    use crate::infra::InMemoryAuthRepository;

    #[tokio::test]
    async fn test_sign_up_stores_hashed_password() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();

        let user_id = register(&repo, &config, "ann@example.com", "hunter22").await;

        let user = repo.find_by_id(&user_id).await.unwrap().unwrap();
        assert_eq!(user.name.as_str(), "Ann Lee");
        assert_eq!(user.email.as_str(), "ann@example.com");
        assert!(user.password_hash.as_phc_string().starts_with("$argon2id$"));

        let raw = RawPassword::new("hunter22".to_string()).unwrap();
        assert!(user.password_hash.verify(&raw, None));
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();
        let use_case = SignUpUseCase::new(repo.clone(), config.clone());

        use_case
            .execute(signup_input("Ann Lee", "ann@example.com", "hunter22"))
            .await
            .unwrap();

        let err = use_case
            .execute(signup_input("Other Ann", "ann@example.com", "different"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn test_sign_up_email_is_case_sensitive() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();

        register(&repo, &config, "ann@example.com", "hunter22").await;
        register(&repo, &config, "Ann@example.com", "hunter22").await;
    }
}

#[cfg(test)]
mod repository_tests {
    use crate::domain::entity::user::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{
        display_name::DisplayName,
        email::Email,
        user_password::{RawPassword, UserPassword},
    };
    use crate::error::AuthError;
    use crate::infra::InMemoryAuthRepository;

    fn user(name: &str, email: &str) -> User {
        let raw = RawPassword::new("hunter22".to_string()).unwrap();
        User::new(
            DisplayName::new(name).unwrap(),
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_rejects_taken_email() {
        let repo = InMemoryAuthRepository::new();
        let first = user("Ann Lee", "ann@example.com");
        let second = user("Other Ann", "ann@example.com");

        repo.create(&first).await.unwrap();
        let err = repo.create(&second).await.unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
        assert!(repo.contains(&first.user_id).unwrap());
        assert!(!repo.contains(&second.user_id).unwrap());
    }

    #[tokio::test]
    async fn test_create_accepts_other_case_as_distinct() {
        let repo = InMemoryAuthRepository::new();

        repo.create(&user("Ann Lee", "ann@example.com")).await.unwrap();
        repo.create(&user("Ann Lee", "Ann@example.com")).await.unwrap();
    }
}

#[cfg(test)]
mod login_tests {
    use std::sync::Arc;

    use super::fixtures::*;
    use crate::application::{AuthConfig, LoginInput, LoginUseCase, SessionClaims};
    use crate::domain::value_object::{email::Email, user_password::RawPassword};
    use crate::error::AuthError;
    use crate::infra::InMemoryAuthRepository;

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: Email::new(email).unwrap(),
            password: RawPassword::new(password.to_string()).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();
        let user_id = register(&repo, &config, "ann@example.com", "hunter22").await;

        let output = LoginUseCase::new(repo.clone(), config.clone())
            .execute(login_input("ann@example.com", "hunter22"))
            .await
            .unwrap();

        assert_eq!(output.user_id, user_id);
        assert_eq!(output.name, "Ann Lee");
        assert_eq!(output.email, "ann@example.com");

        let claims: SessionClaims = config.token_keys().verify(&output.token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "ann@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();
        register(&repo, &config, "ann@example.com", "hunter22").await;
        let use_case = LoginUseCase::new(repo.clone(), config.clone());

        let wrong_password = use_case
            .execute(login_input("ann@example.com", "wrong-pass"))
            .await
            .unwrap_err();
        let unknown_email = use_case
            .execute(login_input("nobody@example.com", "hunter22"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_respects_pepper() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let peppered =
            Arc::new(AuthConfig::new(SECRET).with_pepper(Some(b"pepper".to_vec())));
        register(&repo, &peppered, "ann@example.com", "hunter22").await;

        let without_pepper = LoginUseCase::new(repo.clone(), config())
            .execute(login_input("ann@example.com", "hunter22"))
            .await;
        assert!(matches!(without_pepper, Err(AuthError::InvalidCredentials)));

        let with_pepper = LoginUseCase::new(repo.clone(), peppered)
            .execute(login_input("ann@example.com", "hunter22"))
            .await;
        assert!(with_pepper.is_ok());
    }
}

#[cfg(test)]
mod session_tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::fixtures::*;
    use crate::application::{AuthConfig, CheckSessionUseCase, SessionClaims};
    use crate::domain::value_object::user_id::UserId;
    use crate::error::AuthError;
    use crate::infra::InMemoryAuthRepository;

    fn sign(config: &AuthConfig, sub: String, iss: &str, exp_offset: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub,
            email: "ann@example.com".to_string(),
            iss: iss.to_string(),
            iat: now,
            exp: now + exp_offset,
        };
        config.token_keys().sign(&claims).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_resolves_user() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();
        let user_id = register(&repo, &config, "ann@example.com", "hunter22").await;

        let token = sign(&config, user_id.to_string(), &config.issuer, 3600);
        let current = CheckSessionUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap();

        assert_eq!(current.user_id, user_id);
        assert_eq!(current.email.as_str(), "ann@example.com");
        assert_eq!(current.name.as_str(), "Ann Lee");
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();
        let user_id = register(&repo, &config, "ann@example.com", "hunter22").await;

        let token = sign(&config, user_id.to_string(), &config.issuer, -1);
        let err = CheckSessionUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidSession));
    }

    #[tokio::test]
    async fn test_foreign_secret_rejected() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();
        let user_id = register(&repo, &config, "ann@example.com", "hunter22").await;

        let other = AuthConfig::new(b"another-secret".to_vec());
        let token = sign(&other, user_id.to_string(), &config.issuer, 3600);
        let err = CheckSessionUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidSession));
    }

    #[tokio::test]
    async fn test_wrong_issuer_rejected() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();
        let user_id = register(&repo, &config, "ann@example.com", "hunter22").await;

        let token = sign(&config, user_id.to_string(), "someone-else", 3600);
        let err = CheckSessionUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidSession));
    }

    #[tokio::test]
    async fn test_non_uuid_subject_rejected() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();

        let token = sign(&config, "42".to_string(), &config.issuer, 3600);
        let err = CheckSessionUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidSession));
    }

    #[tokio::test]
    async fn test_deleted_user_not_found() {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = config();

        let token = sign(&config, UserId::new().to_string(), &config.issuer, 3600);
        let err = CheckSessionUseCase::new(repo, config)
            .execute(&token)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }
}

#[cfg(test)]
mod http_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::fixtures::SECRET;
    use crate::application::{AuthConfig, CurrentUser};
    use crate::infra::InMemoryAuthRepository;
    use crate::presentation::{SessionState, auth_router_generic, require_session};

    async fn whoami(user: CurrentUser) -> String {
        user.email.as_str().to_string()
    }

    fn app(repo: InMemoryAuthRepository) -> Router {
        let config = AuthConfig::new(SECRET);
        let session = SessionState::new(repo.clone(), config.clone());

        let protected = Router::new()
            .route("/me", get(whoami))
            .route_layer(from_fn_with_state(
                session,
                require_session::<InMemoryAuthRepository>,
            ));

        Router::new()
            .nest("/auth", auth_router_generic(repo, config))
            .merge(protected)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn ann() -> Value {
        json!({"name": "Ann Lee", "email": "ann@example.com", "password": "hunter22"})
    }

    #[tokio::test]
    async fn test_signup_then_duplicate() {
        let app = app(InMemoryAuthRepository::new());

        let (status, body) = send(&app, post_json("/auth/signup", ann())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User Sign up Successful");

        let (status, body) = send(&app, post_json("/auth/signup", ann())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User is already exist, you can Login");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_signups_create_one_account() {
        let app = app(InMemoryAuthRepository::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move { send(&app, post_json("/auth/signup", ann())).await.0 })
            })
            .collect();

        let mut statuses = Vec::new();
        for handle in handles {
            statuses.push(handle.await.unwrap());
        }

        let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
        let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();
        assert_eq!(created, 1, "{statuses:?}");
        assert_eq!(conflicts, 7, "{statuses:?}");
    }

    #[tokio::test]
    async fn test_signup_validation_details() {
        let app = app(InMemoryAuthRepository::new());

        let body = json!({"name": "Ann Lee", "email": "ann@example.com", "password": "abc"});
        let (status, body) = send(&app, post_json("/auth/signup", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"]["details"][0]["message"],
            "\"password\" length must be at least 4 characters long"
        );
        assert_eq!(body["error"]["details"][0]["path"][0], "password");
    }

    #[tokio::test]
    async fn test_signup_malformed_json() {
        let app = app(InMemoryAuthRepository::new());

        let req = Request::builder()
            .method("POST")
            .uri("/auth/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_login_success_and_failure_shapes() {
        let app = app(InMemoryAuthRepository::new());
        send(&app, post_json("/auth/signup", ann())).await;

        let (status, body) = send(
            &app,
            post_json(
                "/auth/login",
                json!({"email": "ann@example.com", "password": "hunter22"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["name"], "Ann Lee");
        assert_eq!(body["email"], "ann@example.com");
        assert!(!body["token"].as_str().unwrap().is_empty());
        assert_eq!(body["token"], body["jwtToken"]);

        let (wrong_status, wrong_body) = send(
            &app,
            post_json(
                "/auth/login",
                json!({"email": "ann@example.com", "password": "nope-nope"}),
            ),
        )
        .await;
        let (unknown_status, unknown_body) = send(
            &app,
            post_json(
                "/auth/login",
                json!({"email": "bob@example.com", "password": "hunter22"}),
            ),
        )
        .await;

        assert_eq!(wrong_status, StatusCode::FORBIDDEN);
        assert_eq!(unknown_status, StatusCode::FORBIDDEN);
        assert_eq!(wrong_body, unknown_body);
        assert_eq!(wrong_body["message"], "Auth Failed Detail are Wrong");
    }

    #[tokio::test]
    async fn test_session_middleware_statuses() {
        let repo = InMemoryAuthRepository::new();
        let app = app(repo.clone());
        send(&app, post_json("/auth/signup", ann())).await;
        let (_, body) = send(
            &app,
            post_json(
                "/auth/login",
                json!({"email": "ann@example.com", "password": "hunter22"}),
            ),
        )
        .await;
        let token = body["token"].as_str().unwrap().to_string();

        // No header
        let (status, body) = send(&app, get_with_token("/me", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "No token, authorization denied");

        // Forged token
        let (status, _) = send(&app, get_with_token("/me", Some("a.b.c"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // Valid token
        let response = app
            .clone()
            .oneshot(get_with_token("/me", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ann@example.com");
    }

    #[tokio::test]
    async fn test_session_for_removed_user_is_not_found() {
        let repo = InMemoryAuthRepository::new();
        let app = app(repo.clone());
        send(&app, post_json("/auth/signup", ann())).await;
        let (_, body) = send(
            &app,
            post_json(
                "/auth/login",
                json!({"email": "ann@example.com", "password": "hunter22"}),
            ),
        )
        .await;
        let token = body["token"].as_str().unwrap().to_string();

        let user_id = token_subject(&token);
        assert!(repo.remove(&user_id).is_some());

        let (status, body) = send(&app, get_with_token("/me", Some(&token))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User not found");
    }

    fn token_subject(token: &str) -> crate::UserId {
        let claims: crate::application::SessionClaims = AuthConfig::new(SECRET)
            .token_keys()
            .verify(token)
            .unwrap();
        claims.sub.parse().unwrap()
    }
}
