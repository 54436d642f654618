//! Moving tokens in and out of requests.
//!
//! Inbound, a token arrives either in a cookie entry named
//! `Authorization` or in a bearer `Authorization` header. The cookie is
//! consulted first and the header is the fallback; callers must not rely
//! on the other order. Outbound, a token is formatted as an HttpOnly
//! cookie string.

/// Extract a token from the raw `Cookie` and `Authorization` header
/// values of an inbound request.
///
/// Cookie form: the value after the `Authorization=` marker, stripped at
/// the first `;`. Header form: `Bearer <token>`. Returns `None` when
/// neither carries a non-empty token.
pub fn extract_token<'a>(
    cookie_header: Option<&'a str>,
    authorization_header: Option<&'a str>,
) -> Option<&'a str> {
    cookie_header
        .and_then(token_from_cookie)
        .or_else(|| authorization_header.and_then(token_from_bearer))
}

/// Format an outbound session cookie carrying `token`.
pub fn format_cookie(token: &str, ttl_seconds: i64) -> String {
    format!("Authorization={token}; HttpOnly; Max-Age={ttl_seconds};")
}

fn token_from_cookie(cookie: &str) -> Option<&str> {
    let (_, rest) = cookie.split_once("Authorization=")?;
    let token = rest.split(';').next().unwrap_or(rest).trim();

    if token.is_empty() { None } else { Some(token) }
}

fn token_from_bearer(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
