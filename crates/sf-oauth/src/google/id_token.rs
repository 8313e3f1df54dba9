use crate::{OAuthError, OAuthUserInfo, Result as OAuthErrorResult};

use std::panic::Location;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use serde_json::Value;

/// Decode the payload segment of Google's compact ID token into an identity
/// record.
///
/// The inner signature is deliberately NOT verified: this token was just
/// obtained over TLS directly from Google's token endpoint within the same
/// request, which is the integrity guarantee. It must never be fed a token
/// that arrived from a client or any other less trusted path; such a token
/// would have to be verified against Google's published keys first.
#[track_caller]
pub(crate) fn parse_id_token(id_token: &str) -> OAuthErrorResult<OAuthUserInfo> {
    let mut segments = id_token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
        _ => {
            return Err(OAuthError::MalformedResponse {
                message: "id_token is not a three-segment compact JWT".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| OAuthError::MalformedResponse {
            message: format!("id_token payload is not valid base64url: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let claims: Value =
        serde_json::from_slice(&decoded).map_err(|e| OAuthError::MalformedResponse {
            message: format!("id_token payload is not valid JSON: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let sub = claims
        .get("sub")
        .and_then(Value::as_str)
        .ok_or_else(|| OAuthError::MissingClaim {
            claim: "sub".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let email = claims
        .get("email")
        .and_then(Value::as_str)
        .ok_or_else(|| OAuthError::MissingClaim {
            claim: "email".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let avatar_url = claims
        .get("picture")
        .and_then(Value::as_str)
        .map(String::from);

    // Username falls out of the email local part.
    let username = email.split('@').next().unwrap_or(email);

    Ok(OAuthUserInfo {
        provider_user_id: sub.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        avatar_url,
    })
}
