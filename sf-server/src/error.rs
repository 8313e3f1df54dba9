use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: String },

    #[error("Invalid bind address: {source}")]
    InvalidBindAddr { source: std::net::AddrParseError },

    #[error("Invalid value for {name}: {message}")]
    InvalidEnv { name: String, message: String },

    #[error("Environment variable error: {message}")]
    EnvVar { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
