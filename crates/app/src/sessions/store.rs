//! Session store contract.

use async_trait::async_trait;
use mockall::automock;
use trolley::session::Session;

use crate::sessions::{errors::SessionStoreError, key::SessionKey};

#[automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a live session. Unknown and expired keys both return `None`.
    async fn load(&self, key: &SessionKey) -> Result<Option<Session>, SessionStoreError>;

    /// Store a session, pushing its expiry forward.
    async fn save(&self, key: &SessionKey, session: &Session) -> Result<(), SessionStoreError>;

    /// Drop expired sessions, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize, SessionStoreError>;
}
