use serde::Deserialize;

/// Google token endpoint response. The exchange also returns an access
/// token, scope, and expiry, but only the ID token is consumed here.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub id_token: String,
}
