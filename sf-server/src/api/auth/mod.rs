pub mod auth;
pub mod auth_response;
pub mod me_response;
pub mod social_auth_query;
