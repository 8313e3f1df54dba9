pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::me::Me;
pub use models::oauth_provider_type::OAuthProviderType;
pub use models::user::User;
pub use models::user_basic_info::UserBasicInfo;
pub use models::user_linked_social::UserLinkedSocial;
pub use models::user_role::UserRole;
