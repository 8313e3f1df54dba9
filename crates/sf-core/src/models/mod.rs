pub mod me;
pub mod oauth_provider_type;
pub mod user;
pub mod user_basic_info;
pub mod user_linked_social;
pub mod user_role;
