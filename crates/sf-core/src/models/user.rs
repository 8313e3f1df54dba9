use crate::UserRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A local account. Created once at first social login and immutable
/// afterwards as far as this core is concerned; `id` is the only identity
/// that ever goes into a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// A freshly registered account with the default role.
    pub fn new(email: &str, username: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: username.to_string(),
            role: UserRole::Default,
            registered_at: Utc::now(),
        }
    }
}
