//! Session store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("failed to encode or decode session data")]
    Codec(#[from] serde_json::Error),

    #[error("invalid session expiry")]
    Expiry(#[from] jiff::Error),

    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
