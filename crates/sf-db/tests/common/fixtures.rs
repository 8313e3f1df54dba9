#![allow(dead_code)]

use sf_core::{OAuthProviderType, User, UserBasicInfo, UserLinkedSocial};
use sf_db::{UserBasicInfoRepository, UserLinkedSocialRepository, UserRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates a test User with sensible defaults
pub fn create_test_user() -> User {
    User::new("alice@example.com", "alice")
}

/// Inserts a user and returns its id
pub async fn insert_test_user(pool: &SqlitePool, user: &User) -> Uuid {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserRepository::create(&mut conn, user)
        .await
        .expect("Failed to insert test user");
    user.id
}

/// Inserts a basic-info row for the given user
pub async fn insert_test_basic_info(pool: &SqlitePool, user_id: Uuid, name: &str) {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserBasicInfoRepository::create(&mut conn, &UserBasicInfo::new(user_id, name))
        .await
        .expect("Failed to insert test basic info");
}

/// Inserts a linked-social row for the given user
pub async fn insert_test_linked_social(pool: &SqlitePool, user_id: Uuid, verification: &str) {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    UserLinkedSocialRepository::create(
        &mut conn,
        &UserLinkedSocial::new(user_id, OAuthProviderType::Google, verification),
    )
    .await
    .expect("Failed to insert test linked social");
}
