//! State

use std::sync::Arc;

use trolley_app::context::AppContext;

use crate::config::sessions::SessionConfig;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) sessions: SessionConfig,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, sessions: SessionConfig) -> Self {
        Self { app, sessions }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, sessions: SessionConfig) -> Arc<Self> {
        Arc::new(Self::new(app, sessions))
    }
}
