//! Session keys.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD as BASE64};
use rand::{RngCore, rngs::OsRng};

/// Session key prefix.
pub const SESSION_KEY_PREFIX: &str = "sess_";

/// Number of random bytes encoded in a key.
pub const SESSION_KEY_BYTES: usize = 18;

const SESSION_KEY_ENCODED_CHARS: usize = SESSION_KEY_BYTES / 3 * 4;

/// Opaque identifier of a stored session, carried in the session cookie.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    /// Generate a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; SESSION_KEY_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self(format!("{SESSION_KEY_PREFIX}{}", BASE64.encode(bytes)))
    }

    /// Parse a key received from a client. Returns `None` for anything that
    /// could not have been produced by [`SessionKey::generate`].
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let encoded = value.strip_prefix(SESSION_KEY_PREFIX)?;

        if encoded.len() != SESSION_KEY_ENCODED_CHARS {
            return None;
        }

        BASE64.decode(encoded).ok()?;

        Some(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keys are bearer credentials; keep them out of logs.
impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionKey").field(&"<redacted>").finish()
    }
}
