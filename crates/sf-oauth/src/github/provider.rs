use crate::github::access_token::extract_access_token;
use crate::github::config::GithubOAuthConfig;
use crate::github::user_response::GithubUserResponse;
use crate::{OAuthError, OAuthProvider, OAuthUserInfo, Result as OAuthErrorResult};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GithubTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    redirect_uri: &'a str,
}

/// GitHub adapter: code exchange for an access token, then an authenticated
/// profile fetch.
pub struct GithubOAuthProvider {
    config: GithubOAuthConfig,
    client: reqwest::Client,
}

impl GithubOAuthProvider {
    pub fn new(config: GithubOAuthConfig) -> OAuthErrorResult<Self> {
        let client = reqwest::Client::builder()
            // GitHub's API rejects requests without a User-Agent.
            .user_agent(concat!("skillforge/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    async fn request_access_token(&self, code: &str) -> OAuthErrorResult<String> {
        let request = GithubTokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            code,
            redirect_uri: &self.config.redirect_uri,
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

        let body = response.text().await?;
        extract_access_token(&body)
            .map(String::from)
            .ok_or_else(|| OAuthError::MalformedResponse {
                message: "token response contains no access_token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn fetch_user(&self, access_token: &str) -> OAuthErrorResult<GithubUserResponse> {
        let response = self
            .client
            .get(format!("{}/user", self.config.api_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OAuthError::UpstreamStatus {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl OAuthProvider for GithubOAuthProvider {
    async fn extract_user(&self, code: &str) -> OAuthErrorResult<OAuthUserInfo> {
        let access_token = self.request_access_token(code).await?;
        let user = self.fetch_user(&access_token).await?;

        let email = user.email.ok_or_else(|| OAuthError::MissingClaim {
            claim: "email".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(OAuthUserInfo {
            provider_user_id: user.id.to_string(),
            username: user.login,
            email,
            avatar_url: user.avatar_url,
        })
    }
}
