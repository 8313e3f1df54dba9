use crate::{DbError, Result as DbErrorResult};

use sf_core::UserLinkedSocial;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

pub struct UserLinkedSocialRepository {
    pool: SqlitePool,
}

impl UserLinkedSocialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the account-to-external-identity link. A unique-violation
    /// error here means another request registered the same external
    /// identity first; callers check `DbError::is_unique_violation`.
    pub async fn create(conn: &mut SqliteConnection, link: &UserLinkedSocial) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users_linked_social (id, user_id, provider, verification)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(link.id.to_string())
        .bind(link.user_id.to_string())
        .bind(link.provider.as_str())
        .bind(&link.verification)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    pub async fn exists_by_verification(&self, verification: &str) -> DbErrorResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM users_linked_social WHERE verification = ?)",
        )
        .bind(verification)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    pub async fn find_user_id_by_verification(
        &self,
        verification: &str,
    ) -> DbErrorResult<Option<Uuid>> {
        let user_id = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM users_linked_social WHERE verification = ?",
        )
        .bind(verification)
        .fetch_optional(&self.pool)
        .await?;

        user_id
            .map(|id| {
                Uuid::parse_str(&id).map_err(|e| DbError::Decode {
                    message: format!("Invalid UUID in users_linked_social.user_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()
    }
}
