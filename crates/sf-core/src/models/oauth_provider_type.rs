use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The closed set of supported OAuth providers.
///
/// The wire format (the `type` query parameter and the persisted provider
/// column) uses the upper-case names; anything outside this set is rejected
/// at the parse boundary, before any provider call is made.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OAuthProviderType {
    Google,
    Github,
}

impl OAuthProviderType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Google => "GOOGLE",
            Self::Github => "GITHUB",
        }
    }
}

impl fmt::Display for OAuthProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OAuthProviderType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "GOOGLE" => Ok(Self::Google),
            "GITHUB" => Ok(Self::Github),
            _ => Err(CoreError::InvalidProviderType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
