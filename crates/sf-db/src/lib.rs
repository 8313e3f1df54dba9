pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::connect;
pub use error::{DbError, Result};
pub use repositories::user_basic_info_repository::UserBasicInfoRepository;
pub use repositories::user_linked_social_repository::UserLinkedSocialRepository;
pub use repositories::user_repository::UserRepository;
