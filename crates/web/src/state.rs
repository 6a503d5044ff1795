//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::middleware::session::FormSessionStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Per-visitor form state lives in the session
/// store, which is shared with the expired-session sweep.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    sessions: FormSessionStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: WebConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                sessions: FormSessionStore::new(),
            }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get the in-memory session store.
    #[must_use]
    pub fn sessions(&self) -> &FormSessionStore {
        &self.inner.sessions
    }
}
