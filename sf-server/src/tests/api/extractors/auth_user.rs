use crate::{ApiError, AppState, AuthService, AuthUser};

use sf_auth::{Claims, JwtCodec};
use sf_core::{User, UserRole};
use sf_db::UserRepository;
use sf_oauth::{
    GithubOAuthConfig, GithubOAuthProvider, GoogleOAuthConfig, GoogleOAuthProvider,
    OAuthProviderRegistry,
};

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use sqlx::SqlitePool;
use uuid::Uuid;

// base64 of "skillforge-test-signing-secret-0123456789"
const TEST_SECRET: &str = "c2tpbGxmb3JnZS10ZXN0LXNpZ25pbmctc2VjcmV0LTAxMjM0NTY3ODk=";

fn test_registry() -> OAuthProviderRegistry {
    // Endpoints are never contacted by these tests
    let google = GoogleOAuthProvider::new(GoogleOAuthConfig {
        client_id: "test-client".into(),
        client_secret: "test-secret".into(),
        redirect_uri: "http://localhost/callback".into(),
        grant_type: "authorization_code".into(),
        token_url: "http://127.0.0.1:9/token".into(),
        timeout: Duration::from_secs(1),
    })
    .expect("Failed to build Google provider");

    let github = GithubOAuthProvider::new(GithubOAuthConfig {
        client_id: "test-client".into(),
        client_secret: "test-secret".into(),
        redirect_uri: "http://localhost/callback".into(),
        token_url: "http://127.0.0.1:9/token".into(),
        api_url: "http://127.0.0.1:9".into(),
        timeout: Duration::from_secs(1),
    })
    .expect("Failed to build GitHub provider");

    OAuthProviderRegistry::new(google, github)
}

async fn create_test_state() -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/sf-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let jwt = Arc::new(JwtCodec::from_base64_secret(TEST_SECRET).expect("Failed to build codec"));
    let auth = Arc::new(AuthService::new(
        pool.clone(),
        jwt.clone(),
        Arc::new(test_registry()),
    ));

    AppState { pool, jwt, auth }
}

async fn insert_user(pool: &SqlitePool) -> Uuid {
    let user = User::new("alice@example.com", "alice");
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserRepository::create(&mut conn, &user)
        .await
        .expect("Failed to insert user");
    user.id
}

fn expired_token_for(subject: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        iat: now - 100_000,
        exp: now - 1_000,
    };
    let secret = BASE64_STANDARD.decode(TEST_SECRET).unwrap();
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(&secret),
    )
    .unwrap()
}

fn request_with_bearer(token: &str) -> Request<Body> {
    Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_missing_header_is_rejected() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_valid_token_resolves_account_and_role() {
    let state = create_test_state().await;
    let user_id = insert_user(&state.pool).await;
    let token = state.jwt.issue(&user_id.to_string()).unwrap();

    let (mut parts, _body) = request_with_bearer(&token).into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, &state)
        .await
        .expect("Extractor should accept a fresh token");

    assert_eq!(auth_user.id, user_id);
    assert_eq!(auth_user.role, UserRole::Default);
}

#[tokio::test]
async fn test_token_for_unknown_account_is_rejected() {
    let state = create_test_state().await;
    let token = state.jwt.issue(&Uuid::new_v4().to_string()).unwrap();

    let (mut parts, _body) = request_with_bearer(&token).into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let state = create_test_state().await;
    let user_id = insert_user(&state.pool).await;
    let token = expired_token_for(&user_id.to_string());

    let (mut parts, _body) = request_with_bearer(&token).into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let state = create_test_state().await;

    let (mut parts, _body) = request_with_bearer("not.a.token").into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
