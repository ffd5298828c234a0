//! Session cookie reading and building.

use salvo::{
    http::cookie::{Cookie, SameSite, time::Duration},
    prelude::Request,
};
use trolley_app::sessions::SessionKey;

use crate::config::sessions::SessionConfig;

/// Read the session key from the request's cookie jar.
///
/// Returns `None` when the cookie is absent or does not hold a well-formed key.
pub(super) fn session_key(req: &Request, name: &str) -> Option<SessionKey> {
    req.cookie(name)
        .and_then(|cookie| SessionKey::parse(cookie.value_trimmed()))
}

/// Cookie carrying the session key back to the client.
pub(super) fn session_cookie(key: &SessionKey, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), key.to_string()))
        .path("/")
        .max_age(Duration::seconds(config.ttl().as_secs()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}
