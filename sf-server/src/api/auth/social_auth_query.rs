use serde::Deserialize;

/// Query parameters for POST /api/v1/auth/social
#[derive(Debug, Deserialize)]
pub struct SocialAuthQuery {
    /// Provider type, e.g. "GOOGLE" or "GITHUB" (required)
    #[serde(rename = "type")]
    pub provider: String,

    /// Authorization code from the provider redirect (required)
    pub code: String,
}
