//! In-memory session store.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::debug;
use trolley::session::Session;

use crate::sessions::{errors::SessionStoreError, key::SessionKey, store::SessionStore};

/// Default session lifetime: two weeks.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_hours(14 * 24);

#[derive(Debug, Clone)]
struct StoredSession {
    data: String,
    expires_at: Timestamp,
}

impl StoredSession {
    fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

/// Sessions held as JSON strings in process memory.
///
/// Each save moves the expiry to `now + ttl`.
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: RwLock<FxHashMap<SessionKey, StoredSession>>,
    ttl: SignedDuration,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl MemorySessionStore {
    #[must_use]
    pub fn new(ttl: SignedDuration) -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
            ttl,
        }
    }

    /// Number of stored sessions, expired ones included.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, key: &SessionKey) -> Result<Option<Session>, SessionStoreError> {
        let sessions = self.sessions.read().await;

        let Some(stored) = sessions.get(key) else {
            return Ok(None);
        };

        if stored.is_expired(Timestamp::now()) {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&stored.data)?))
    }

    async fn save(&self, key: &SessionKey, session: &Session) -> Result<(), SessionStoreError> {
        let stored = StoredSession {
            data: serde_json::to_string(session)?,
            expires_at: Timestamp::now().checked_add(self.ttl)?,
        };

        self.sessions.write().await.insert(key.clone(), stored);

        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, SessionStoreError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, stored| !stored.is_expired(now));

        let purged = before - sessions.len();

        debug!(purged, remaining = sessions.len(), "purged expired sessions");

        Ok(purged)
    }
}
