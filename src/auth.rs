//! Auth surface for the token page.
//!
//! The page itself never talks to the authorization server; it only knows two
//! navigation targets on its own origin:
//! - `<origin>/login` starts the OAuth flow, which redirects back here with
//!   `#access_token=...` in the fragment
//! - `<origin>/logout` clears the server-side session

use std::collections::HashMap;

use crate::constants::TOKEN_PARAM;

pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";

/// Extract a usable access token from parsed fragment params.
///
/// Returns `None` when the key is absent or its value is empty; an empty
/// token is indistinguishable from no token for this page.
#[inline]
pub fn token_from_params(params: &HashMap<String, String>) -> Option<&str> {
    match params.get(TOKEN_PARAM).map(String::as_str) {
        Some(t) if !t.is_empty() => Some(t),
        _ => None,
    }
}

/// `<origin>/login`, tolerating a trailing slash on the origin.
#[inline]
pub fn login_url(origin: &str) -> String {
    join_origin(origin, LOGIN_PATH)
}

/// `<origin>/logout`, tolerating a trailing slash on the origin.
#[inline]
pub fn logout_url(origin: &str) -> String {
    join_origin(origin, LOGOUT_PATH)
}

#[inline]
fn join_origin(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}
