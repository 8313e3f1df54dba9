use crate::google::config::GoogleOAuthConfig;
use crate::google::id_token::parse_id_token;
use crate::google::token_response::GoogleTokenResponse;
use crate::{OAuthError, OAuthProvider, OAuthUserInfo, Result as OAuthErrorResult};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GoogleTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    redirect_uri: &'a str,
    code: &'a str,
    grant_type: &'a str,
}

/// Google adapter: one call to the token endpoint, identity read from the
/// returned ID token's payload.
pub struct GoogleOAuthProvider {
    config: GoogleOAuthConfig,
    client: reqwest::Client,
}

impl GoogleOAuthProvider {
    pub fn new(config: GoogleOAuthConfig) -> OAuthErrorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthProvider {
    async fn extract_user(&self, code: &str) -> OAuthErrorResult<OAuthUserInfo> {
        let request = GoogleTokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            redirect_uri: &self.config.redirect_uri,
            code,
            grant_type: &self.config.grant_type,
        };

        let response = self
            .client
            .post(&self.config.token_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OAuthError::UpstreamStatus {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token_response: GoogleTokenResponse = response.json().await?;
        parse_id_token(&token_response.id_token)
    }
}
