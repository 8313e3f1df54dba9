pub mod config;
pub mod id_token;
pub mod provider;
pub mod token_response;
