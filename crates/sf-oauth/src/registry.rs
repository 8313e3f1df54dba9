use crate::{GithubOAuthProvider, GoogleOAuthProvider, OAuthProvider};

use sf_core::OAuthProviderType;

/// Resolves the adapter for a provider type. The set of providers is fixed
/// at build time; unsupported wire values never reach this point because
/// `OAuthProviderType` rejects them at parse time.
pub struct OAuthProviderRegistry {
    google: GoogleOAuthProvider,
    github: GithubOAuthProvider,
}

impl OAuthProviderRegistry {
    pub fn new(google: GoogleOAuthProvider, github: GithubOAuthProvider) -> Self {
        Self { google, github }
    }

    pub fn get(&self, provider: OAuthProviderType) -> &dyn OAuthProvider {
        match provider {
            OAuthProviderType::Google => &self.google,
            OAuthProviderType::Github => &self.github,
        }
    }
}
