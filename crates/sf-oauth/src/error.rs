use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Upstream OAuth exchange or profile fetch failed. These are surfaced to
/// the client as a generic authentication failure; the variants exist for
/// logging and tests, not for the response body.
#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("Provider request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Provider returned HTTP {status} {location}")]
    UpstreamStatus { status: u16, location: ErrorLocation },

    #[error("Malformed provider response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider response is missing required claim '{claim}' {location}")]
    MissingClaim {
        claim: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for OAuthError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, OAuthError>;
