use serde::{Deserialize, Serialize};

/// Payload of an issued bearer token. The subject is the local account id;
/// nothing else identifying is embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id as a string)
    pub sub: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}
