use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Token lifetime. Re-authentication through a provider is the only renewal
/// path; there are no refresh tokens and no server-side revocation.
const TOKEN_TTL_DAYS: i64 = 31;

/// Issues and validates the signed bearer tokens that stand in for a session.
///
/// The HMAC key is derived once, at construction, from a base64-encoded
/// configuration value; the codec is immutable and safe to share across
/// request tasks.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    /// Build a codec from the base64-encoded `JWT_SECRET` configuration
    /// value. The decoded bytes are used directly as the HMAC-SHA256 key.
    #[track_caller]
    pub fn from_base64_secret(secret: &str) -> AuthErrorResult<Self> {
        let key_bytes =
            BASE64_STANDARD
                .decode(secret)
                .map_err(|e| AuthError::InvalidSecret {
                    message: format!("secret is not valid base64: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        if key_bytes.is_empty() {
            return Err(AuthError::InvalidSecret {
                message: "secret decodes to zero bytes".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Expiry is checked separately by `is_expired`; decoding here only
        // answers "is the signature and structure sound".
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&key_bytes),
            decoding_key: DecodingKey::from_secret(&key_bytes),
            validation,
        })
    }

    /// Issue a token for the given subject (local account id), valid for
    /// 31 days from now.
    #[track_caller]
    pub fn issue(&self, subject: &str) -> AuthErrorResult<String> {
        if subject.is_empty() {
            return Err(AuthError::EmptySubject {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Signature and structural check only. Every decode failure, tampered
    /// byte, or malformed payload degrades to `false`; this never panics and
    /// never distinguishes the failure cause to the caller.
    pub fn is_valid(&self, token: &str) -> bool {
        self.decode_claims(token).is_ok()
    }

    /// Whether the embedded expiry is in the past. Callers must check
    /// `is_valid` first; a structurally invalid token is an error here.
    pub fn is_expired(&self, token: &str) -> AuthErrorResult<bool> {
        let claims = self.decode_claims(token)?;
        Ok(claims.exp < Utc::now().timestamp())
    }

    /// The subject embedded in a previously validated token.
    pub fn extract_subject(&self, token: &str) -> AuthErrorResult<String> {
        Ok(self.decode_claims(token)?.sub)
    }

    #[track_caller]
    fn decode_claims(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| AuthError::JwtDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;
        Ok(token_data.claims)
    }
}
