use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What an authenticated caller sees about themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Me {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}
