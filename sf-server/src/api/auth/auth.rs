//! Authentication REST API handlers

use crate::{ApiError, ApiResult, AppState, AuthResponse, AuthUser, MeResponse, SocialAuthQuery};

use sf_core::OAuthProviderType;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/social?type=GOOGLE&code=...
///
/// Exchange a provider authorization code for a signed session token.
/// Unknown provider types are rejected before any network traffic.
pub async fn social_auth(
    State(state): State<AppState>,
    Query(query): Query<SocialAuthQuery>,
) -> ApiResult<Json<AuthResponse>> {
    let provider = OAuthProviderType::from_str(&query.provider).map_err(|_| {
        ApiError::UnsupportedProvider {
            provider: query.provider.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let jwt_token = state.auth.auth_by_social(provider, &query.code).await?;

    Ok(Json(AuthResponse { jwt_token }))
}

/// GET /api/v1/auth/me
///
/// Return the profile of the caller identified by the bearer token
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> ApiResult<Json<MeResponse>> {
    let me = state.auth.me(auth_user.id).await?;

    Ok(Json(MeResponse::from(me)))
}
