use crate::Result as DbErrorResult;

use sf_core::UserBasicInfo;

use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

pub struct UserBasicInfoRepository {
    pool: SqlitePool,
}

impl UserBasicInfoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the profile row created alongside the account at registration.
    pub async fn create(conn: &mut SqliteConnection, info: &UserBasicInfo) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO users_basic_info (user_id, name) VALUES (?, ?)")
            .bind(info.user_id.to_string())
            .bind(&info.name)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    pub async fn find_name_by_user_id(&self, user_id: Uuid) -> DbErrorResult<Option<String>> {
        let name =
            sqlx::query_scalar::<_, String>("SELECT name FROM users_basic_info WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        Ok(name)
    }
}
