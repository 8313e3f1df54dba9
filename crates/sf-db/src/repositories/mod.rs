pub mod user_basic_info_repository;
pub mod user_linked_social_repository;
pub mod user_repository;
