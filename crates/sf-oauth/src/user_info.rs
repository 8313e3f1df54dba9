/// Normalized identity returned by a provider after code exchange.
/// Transient: consumed by the login service, never persisted as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthUserInfo {
    /// Opaque provider-scoped user id; globally unique lookup key for
    /// resolving returning logins.
    pub provider_user_id: String,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
}
