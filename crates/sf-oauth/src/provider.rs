use crate::{OAuthUserInfo, Result as OAuthErrorResult};

use async_trait::async_trait;

/// Common capability of every OAuth provider adapter: exchange an
/// authorization code for a normalized identity record. Implementations may
/// make several upstream calls; any failure along the way is an
/// `OAuthError` and nothing is retried.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    async fn extract_user(&self, code: &str) -> OAuthErrorResult<OAuthUserInfo>;
}
