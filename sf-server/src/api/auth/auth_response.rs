use serde::Serialize;

/// Successful social login response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}
