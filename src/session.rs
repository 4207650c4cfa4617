//! Cookie and session handling.
//!
//! The API keeps its session in a single cookie named [`TOKEN_COOKIE_NAME`]
//! holding an opaque access token. Cookie values are stored raw; no
//! encoding or decoding is performed.

/// The name of the cookie holding the session token.
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Session data from cookies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// The access token sent as the bearer credential.
    pub access_token: String,
}

/// Gets a cookie value by name from a cookie string, e.g.
/// `"token=abc; theme=dark"`. Returns the first match. Whitespace around
/// entries is ignored; the value is returned exactly as it appears.
pub fn get_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';')
        .filter_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            let key = parts.next()?;
            let value = parts.next()?;

            Some((key, value))
        })
        .find(|(key, _value)| *key == name)
        .map(|(_key, value)| value)
}

/// Gets the session token from a cookie string, if present.
pub fn get_token(cookies: &str) -> Option<&str> {
    get_cookie(cookies, TOKEN_COOKIE_NAME)
}
