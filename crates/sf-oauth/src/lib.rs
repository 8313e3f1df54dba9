pub mod error;
pub mod github;
pub mod google;
pub mod provider;
pub mod registry;
pub mod user_info;

pub use error::{OAuthError, Result};
pub use github::config::GithubOAuthConfig;
pub use github::provider::GithubOAuthProvider;
pub use google::config::GoogleOAuthConfig;
pub use google::provider::GoogleOAuthProvider;
pub use provider::OAuthProvider;
pub use registry::OAuthProviderRegistry;
pub use user_info::OAuthUserInfo;
