use crate::{DbError, Result as DbErrorResult};

use sf_core::{User, UserRole};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new account. Takes the caller's connection so registration
    /// can commit the account together with its profile and linked-social
    /// rows in one transaction.
    pub async fn create(conn: &mut SqliteConnection, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, username, role, registered_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.username)
        .bind(user.role.as_str())
        .bind(user.registered_at.timestamp())
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, username, role, registered_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user).transpose()
    }

    pub async fn find_username_by_id(&self, id: Uuid) -> DbErrorResult<Option<String>> {
        let username = sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(username)
    }

    pub async fn find_role_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserRole>> {
        let role = sqlx::query_scalar::<_, String>("SELECT role FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        role.map(|r| {
            UserRole::from_str(&r).map_err(|e| DbError::Decode {
                message: format!("Invalid role in users.role: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
    }
}

fn map_user(row: SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let registered_at: i64 = row.try_get("registered_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: row.try_get("email")?,
        username: row.try_get("username")?,
        role: UserRole::from_str(&role).map_err(|e| DbError::Decode {
            message: format!("Invalid role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        registered_at: DateTime::from_timestamp(registered_at, 0).ok_or_else(|| {
            DbError::Decode {
                message: "Invalid timestamp in users.registered_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
