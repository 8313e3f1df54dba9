pub mod claims;
pub mod error;
pub mod jwt_codec;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_codec::JwtCodec;
