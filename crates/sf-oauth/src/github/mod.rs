pub mod access_token;
pub mod config;
pub mod provider;
pub mod user_response;
