use std::time::Duration;

pub const GOOGLE_TOKEN_URL: &str = "https://www.googleapis.com/oauth2/v4/token";

/// Google OAuth client settings. `token_url` is injectable so tests can
/// point the adapter at a local stub server.
#[derive(Debug, Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub grant_type: String,
    pub token_url: String,
    /// Bound on each outbound call; exceeded deadlines surface as the same
    /// provider failure as any other transport error.
    pub timeout: Duration,
}
