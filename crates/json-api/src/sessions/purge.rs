//! Background purge of expired sessions.

use std::{sync::Arc, time::Duration};

use tokio::time;
use tracing::{debug, error, info};
use trolley_app::sessions::SessionStore;

/// Run a single purge pass, logging the outcome.
pub(crate) async fn purge_once(store: &dyn SessionStore) -> usize {
    match store.purge_expired().await {
        Ok(0) => {
            debug!("no expired sessions to purge");

            0
        }
        Ok(purged) => {
            info!(purged, "purged expired sessions");

            purged
        }
        Err(source) => {
            error!("failed to purge expired sessions: {source}");

            0
        }
    }
}

/// Purge expired sessions every `interval` until the runtime shuts down.
#[expect(
    clippy::infinite_loop,
    reason = "background task runs until the server exits"
)]
pub(crate) async fn run(store: Arc<dyn SessionStore>, interval: Duration) {
    let mut ticker = time::interval(interval);

    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        purge_once(store.as_ref()).await;
    }
}
