use crate::error::{Result as ServerErrorResult, ServerError};

use sf_oauth::github::config::{GITHUB_API_URL, GITHUB_TOKEN_URL};
use sf_oauth::google::config::GOOGLE_TOKEN_URL;
use sf_oauth::{GithubOAuthConfig, GoogleOAuthConfig};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

const DEFAULT_GRANT_TYPE: &str = "authorization_code";
const DEFAULT_OAUTH_TIMEOUT_SECS: u64 = 10;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Path to the SQLite database file (default: skillforge.db)
    pub database_path: PathBuf,

    /// Base64-encoded HS256 signing secret for issued tokens
    pub jwt_secret: String,

    /// Google OAuth client settings
    pub google: GoogleOAuthConfig,

    /// GitHub OAuth client settings
    pub github: GithubOAuthConfig,

    /// Log level (default: info)
    pub log_level: LevelFilter,

    /// Optional path to log file. None = stdout
    pub log_file: Option<PathBuf>,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "skillforge.db".to_string())
            .into();

        let oauth_timeout = Duration::from_secs(
            std::env::var("OAUTH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_OAUTH_TIMEOUT_SECS),
        );

        let google = GoogleOAuthConfig {
            client_id: require_env("GOOGLE_CLIENT_ID")?,
            client_secret: require_env("GOOGLE_CLIENT_SECRET")?,
            redirect_uri: require_env("GOOGLE_REDIRECT_URI")?,
            grant_type: std::env::var("GOOGLE_GRANT_TYPE")
                .unwrap_or_else(|_| DEFAULT_GRANT_TYPE.to_string()),
            token_url: std::env::var("GOOGLE_TOKEN_URL")
                .unwrap_or_else(|_| GOOGLE_TOKEN_URL.to_string()),
            timeout: oauth_timeout,
        };

        let github = GithubOAuthConfig {
            client_id: require_env("GITHUB_CLIENT_ID")?,
            client_secret: require_env("GITHUB_CLIENT_SECRET")?,
            redirect_uri: require_env("GITHUB_REDIRECT_URI")?,
            token_url: std::env::var("GITHUB_TOKEN_URL")
                .unwrap_or_else(|_| GITHUB_TOKEN_URL.to_string()),
            api_url: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| GITHUB_API_URL.to_string()),
            timeout: oauth_timeout,
        };

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => value
                .parse()
                .map_err(|_| ServerError::InvalidEnv {
                    name: "LOG_LEVEL".to_string(),
                    message: format!("unrecognized log level: {value}"),
                })?,
            Err(_) => LevelFilter::Info,
        };

        Ok(Self {
            bind_addr,
            database_path,
            jwt_secret: require_env("JWT_SECRET")?,
            google,
            github,
            log_level,
            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),
            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        })
    }
}

fn require_env(name: &str) -> ServerErrorResult<String> {
    std::env::var(name).map_err(|_| ServerError::MissingEnv {
        name: name.to_string(),
    })
}
