//! Session cookie plumbing.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

use crate::cms::SessionTokens;

pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";
pub const REFRESH_TOKEN_COOKIE: &str = "sb-refresh-token";

/// One week.
const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

/// Value of a request cookie by name.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Both session tokens from the request cookies.
pub fn session_tokens(headers: &HeaderMap) -> Option<SessionTokens> {
    SessionTokens::from_parts(
        cookie_value(headers, ACCESS_TOKEN_COOKIE),
        cookie_value(headers, REFRESH_TOKEN_COOKIE),
    )
}

/// `Set-Cookie` value issuing a session cookie.
pub fn session_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; Max-Age={SESSION_MAX_AGE_SECS}; HttpOnly; Secure; SameSite=Lax")
}

/// `Set-Cookie` value that makes the browser drop a cookie.
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=Lax")
}
