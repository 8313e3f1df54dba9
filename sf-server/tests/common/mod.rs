#![allow(dead_code)]

use sf_auth::{Claims, JwtCodec};
use sf_oauth::{
    GithubOAuthConfig, GithubOAuthProvider, GoogleOAuthConfig, GoogleOAuthProvider,
    OAuthProviderRegistry,
};
use sf_server::{AppState, AuthService};

use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD as BASE64_STANDARD, URL_SAFE_NO_PAD};
use sqlx::SqlitePool;
use wiremock::MockServer;

/// base64 of "skillforge-test-signing-secret-0123456789"
pub const TEST_SECRET: &str = "c2tpbGxmb3JnZS10ZXN0LXNpZ25pbmctc2VjcmV0LTAxMjM0NTY3ODk=";

/// In-memory database with the full schema applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../crates/sf-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_codec() -> Arc<JwtCodec> {
    Arc::new(JwtCodec::from_base64_secret(TEST_SECRET).expect("Failed to build codec"))
}

/// Both provider adapters pointed at the same stub server
pub fn test_registry(server: &MockServer) -> OAuthProviderRegistry {
    let google = GoogleOAuthProvider::new(GoogleOAuthConfig {
        client_id: "google-client".to_string(),
        client_secret: "google-secret".to_string(),
        redirect_uri: "https://app.example.com/callback".to_string(),
        grant_type: "authorization_code".to_string(),
        token_url: format!("{}/google/token", server.uri()),
        timeout: Duration::from_secs(2),
    })
    .expect("Failed to build Google provider");

    let github = GithubOAuthProvider::new(GithubOAuthConfig {
        client_id: "github-client".to_string(),
        client_secret: "github-secret".to_string(),
        redirect_uri: "https://app.example.com/callback".to_string(),
        token_url: format!("{}/github/token", server.uri()),
        api_url: server.uri(),
        timeout: Duration::from_secs(2),
    })
    .expect("Failed to build GitHub provider");

    OAuthProviderRegistry::new(google, github)
}

/// Full application state wired to a stub provider server
pub async fn create_test_state(server: &MockServer) -> AppState {
    let pool = create_test_pool().await;
    let jwt = test_codec();
    let auth = Arc::new(AuthService::new(
        pool.clone(),
        jwt.clone(),
        Arc::new(test_registry(server)),
    ));

    AppState { pool, jwt, auth }
}

/// Unsigned Google ID token with the given payload. The adapter only
/// decodes the payload segment, so the signature can be a placeholder.
pub fn google_id_token(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{}.{}.signature", header, body)
}

/// Token signed with the test secret but already past its expiry
pub fn expired_token_for(subject: &str) -> String {
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
