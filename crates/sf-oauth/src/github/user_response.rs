use serde::Deserialize;

/// The subset of GitHub's `/user` payload this service consumes. GitHub
/// reports `email: null` for accounts with a private email address.
#[derive(Debug, Deserialize)]
pub struct GithubUserResponse {
    pub id: i64,
    pub login: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}
