/// Pull the access token out of GitHub's token-exchange response body.
///
/// The body looks like `access_token=<value>&scope=...&token_type=bearer`.
/// This is a narrow scan for the `access_token=` key rather than a full
/// form decode, matching the exact shape GitHub returns; the fragility is
/// contained here and must not leak past the adapter.
pub(crate) fn extract_access_token(body: &str) -> Option<&str> {
    let start = body.find("access_token=")? + "access_token=".len();
    let rest = &body[start..];
    let token = match rest.find('&') {
        Some(end) => &rest[..end],
        None => rest,
    };
    if token.is_empty() { None } else { Some(token) }
}
