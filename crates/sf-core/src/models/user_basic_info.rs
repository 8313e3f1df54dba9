use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal profile record created alongside the account at registration,
/// seeded from the username. Owned by the profile domain beyond creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBasicInfo {
    pub user_id: Uuid,
    pub name: String,
}

impl UserBasicInfo {
    pub fn new(user_id: Uuid, name: &str) -> Self {
        Self {
            user_id,
            name: name.to_string(),
        }
    }
}
