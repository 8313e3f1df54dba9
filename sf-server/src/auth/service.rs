//! Social login orchestration
//!
//! Bridges the provider adapters, the account store, and the token codec.
//! Login is idempotent per provider identity: the first call provisions an
//! account inside one transaction, every later call resolves the existing
//! account and issues a fresh token.

use crate::{ApiError, ApiResult};

use sf_auth::JwtCodec;
use sf_core::{Me, OAuthProviderType, User, UserBasicInfo, UserLinkedSocial};
use sf_db::{
    DbError, UserBasicInfoRepository, UserLinkedSocialRepository, UserRepository,
};
use sf_oauth::{OAuthProviderRegistry, OAuthUserInfo};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct AuthService {
    pool: SqlitePool,
    jwt: Arc<JwtCodec>,
    registry: Arc<OAuthProviderRegistry>,
}

impl AuthService {
    pub fn new(pool: SqlitePool, jwt: Arc<JwtCodec>, registry: Arc<OAuthProviderRegistry>) -> Self {
        Self {
            pool,
            jwt,
            registry,
        }
    }

    /// Exchange an authorization code with the provider, then log the
    /// resolved identity in. Returns a signed token for the account.
    pub async fn auth_by_social(
        &self,
        provider: OAuthProviderType,
        code: &str,
    ) -> ApiResult<String> {
        let user_info = self.registry.get(provider).extract_user(code).await?;
        self.login_with_identity(provider, user_info).await
    }

    /// Log a verified provider identity in, provisioning an account on
    /// first contact.
    pub async fn login_with_identity(
        &self,
        provider: OAuthProviderType,
        user_info: OAuthUserInfo,
    ) -> ApiResult<String> {
        let linked = UserLinkedSocialRepository::new(self.pool.clone());

        if let Some(user_id) = linked
            .find_user_id_by_verification(&user_info.provider_user_id)
            .await?
        {
            info!("Login for existing account {} via {}", user_id, provider);
            return Ok(self.jwt.issue(&user_id.to_string())?);
        }

        match self.provision_account(provider, &user_info).await {
            Ok(user_id) => {
                info!("Provisioned account {} via {}", user_id, provider);
                Ok(self.jwt.issue(&user_id.to_string())?)
            }
            // Two concurrent first logins for the same identity: the loser
            // hits the unique index on verification, rolls back, and joins
            // the account the winner created.
            Err(e) if e.is_unique_violation() => {
                let user_id = linked
                    .find_user_id_by_verification(&user_info.provider_user_id)
                    .await?
                    .ok_or_else(|| ApiError::Internal {
                        message: "Linked identity vanished after conflict".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                info!("Login raced provisioning, joined account {}", user_id);
                Ok(self.jwt.issue(&user_id.to_string())?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create the user row, its profile row, and the provider link in one
    /// transaction. Any failure rolls all three back.
    async fn provision_account(
        &self,
        provider: OAuthProviderType,
        user_info: &OAuthUserInfo,
    ) -> Result<Uuid, DbError> {
        let mut tx = self.pool.begin().await?;

        let user = User::new(&user_info.email, &user_info.username);
        UserRepository::create(&mut *tx, &user).await?;
        UserBasicInfoRepository::create(&mut *tx, &UserBasicInfo::new(user.id, &user.username))
            .await?;
        UserLinkedSocialRepository::create(
            &mut *tx,
            &UserLinkedSocial::new(user.id, provider, &user_info.provider_user_id),
        )
        .await?;

        tx.commit().await?;
        Ok(user.id)
    }

    /// Resolve the profile for an authenticated account
    pub async fn me(&self, user_id: Uuid) -> ApiResult<Me> {
        let username = UserRepository::new(self.pool.clone())
            .find_username_by_id(user_id)
            .await?
            .ok_or_else(|| not_found(user_id))?;

        let name = UserBasicInfoRepository::new(self.pool.clone())
            .find_name_by_user_id(user_id)
            .await?
            .ok_or_else(|| not_found(user_id))?;

        Ok(Me {
            id: user_id,
            username,
            name,
        })
    }
}

#[track_caller]
fn not_found(user_id: Uuid) -> ApiError {
    ApiError::NotFound {
        message: format!("User {} not found", user_id),
        location: ErrorLocation::from(Location::caller()),
    }
}
