pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{me, social_auth},
        auth_response::AuthResponse,
        me_response::MeResponse,
        social_auth_query::SocialAuthQuery,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
};

pub use crate::auth::service::AuthService;
pub use crate::config::Config;
pub use crate::error::{Result as ServerErrorResult, ServerError};
pub use crate::routes::build_router;
pub use crate::state::AppState;
