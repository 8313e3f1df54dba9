//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use sf_core::UserRole;
use sf_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Authenticated caller resolved from the `Authorization: Bearer` header.
///
/// Rejects with 401 when the header is missing, the token fails signature
/// verification, the token is past its expiry, or the subject does not
/// resolve to a known account.
pub struct AuthUser {
    pub id: Uuid,
    pub role: UserRole,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|header| header.strip_prefix("Bearer "))
                .map(str::trim)
                .ok_or_else(|| unauthorized("Missing bearer token"))?;

            if !state.jwt.is_valid(token) {
                return Err(unauthorized("Invalid token"));
            }

            // is_valid already proved the token decodes, so a decode failure
            // here is unreachable; treat it as expired rather than a 500.
            if state.jwt.is_expired(token).unwrap_or(true) {
                return Err(unauthorized("Token expired"));
            }

            let subject = state
                .jwt
                .extract_subject(token)
                .map_err(|_| unauthorized("Invalid token"))?;

            let id = Uuid::parse_str(&subject)
                .map_err(|_| unauthorized("Invalid token subject"))?;

            let role = UserRepository::new(state.pool.clone())
                .find_role_by_id(id)
                .await?
                .ok_or_else(|| unauthorized("Unknown account"))?;

            Ok(AuthUser { id, role })
        }
    }
}

#[track_caller]
fn unauthorized(message: &str) -> ApiError {
    ApiError::Unauthorized {
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
