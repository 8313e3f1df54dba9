use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid signing secret: {message} {location}")]
    InvalidSecret {
        message: String,
        location: ErrorLocation,
    },

    #[error("Empty token subject {location}")]
    EmptySubject { location: ErrorLocation },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
