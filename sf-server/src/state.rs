use crate::AuthService;

use sf_auth::JwtCodec;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for all request handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt: Arc<JwtCodec>,
    pub auth: Arc<AuthService>,
}
