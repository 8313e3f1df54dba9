use std::time::Duration;

pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub OAuth client settings. Both the token endpoint and the API base
/// are injectable so tests can point the adapter at a local stub server.
#[derive(Debug, Clone)]
pub struct GithubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub token_url: String,
    pub api_url: String,
    pub timeout: Duration,
}
