use sf_core::Me;

use serde::Serialize;
use uuid::Uuid;

/// Profile of the authenticated account
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}

impl From<Me> for MeResponse {
    fn from(me: Me) -> Self {
        Self {
            id: me.id,
            username: me.username,
            name: me.name,
        }
    }
}
