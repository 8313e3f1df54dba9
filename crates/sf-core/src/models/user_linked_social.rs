use crate::OAuthProviderType;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted association between a local account and one external
/// identity from one provider.
///
/// `verification` is the provider-scoped external user id and the sole
/// lookup key for resolving returning logins, so it is globally unique
/// across all rows regardless of provider (enforced by a unique index).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLinkedSocial {
    pub id: Uuid,
    pub user_id: Uuid,
    pub provider: OAuthProviderType,
    pub verification: String,
}

impl UserLinkedSocial {
    pub fn new(user_id: Uuid, provider: OAuthProviderType, verification: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            provider,
            verification: verification.to_string(),
        }
    }
}
