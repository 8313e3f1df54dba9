use sf_server::{AppState, AuthService, Config, build_router, logger};

use sf_auth::JwtCodec;
use sf_oauth::{GithubOAuthProvider, GoogleOAuthProvider, OAuthProviderRegistry};

use std::error::Error;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_file.clone(), config.log_colored)?;

    info!("Starting sf-server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize database pool and run migrations
    info!("Connecting to database: {}", config.database_path.display());
    let pool = sf_db::connect(&config.database_path).await?;
    info!("Database connection established");

    // Token codec and provider adapters
    let jwt = Arc::new(JwtCodec::from_base64_secret(&config.jwt_secret)?);
    let registry = Arc::new(OAuthProviderRegistry::new(
        GoogleOAuthProvider::new(config.google.clone())?,
        GithubOAuthProvider::new(config.github.clone())?,
    ));
    info!("OAuth providers initialized: GOOGLE, GITHUB");

    let auth = Arc::new(AuthService::new(pool.clone(), jwt.clone(), registry));

    // Build application state and router
    let app_state = AppState { pool, jwt, auth };
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received SIGINT (Ctrl+C), shutting down");
            }
        })
        .await?;

    Ok(())
}
