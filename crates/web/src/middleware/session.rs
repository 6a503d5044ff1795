//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. Nothing is persisted:
//! restarting the server discards every open form. Expired sessions are
//! swept by a background task so abandoned forms don't pile up.

use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tower_sessions::{
    Expiry, SessionManagerLayer, SessionStore,
    cookie::time::OffsetDateTime,
    session::{Id, Record},
    session_store::{self, ExpiredDeletion},
};

use crate::config::WebConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "ob_session";

/// Session expiry time in seconds (2 hours of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 2 * 60 * 60;

/// How often expired sessions are removed from the store.
pub const EXPIRED_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// In-memory session store that can drop its expired records.
///
/// Cheaply cloneable; clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct FormSessionStore(Arc<Mutex<HashMap<Id, Record>>>);

impl FormSessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held, expired or not.
    pub async fn len(&self) -> usize {
        self.0.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.0.lock().await.is_empty()
    }

    /// Remove every record whose expiry has passed and return how many went.
    pub async fn purge_expired(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let mut records = self.0.lock().await;
        let before = records.len();
        records.retain(|_, record| record.expiry_date > now);
        before - records.len()
    }
}

#[async_trait]
impl SessionStore for FormSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        let mut records = self.0.lock().await;
        while records.contains_key(&record.id) {
            record.id = Id::default();
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.0.lock().await.insert(record.id, record.clone());
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc();
        Ok(self
            .0
            .lock()
            .await
            .get(session_id)
            .filter(|record| record.expiry_date > now)
            .cloned())
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.0.lock().await.remove(session_id);
        Ok(())
    }
}

#[async_trait]
impl ExpiredDeletion for FormSessionStore {
    async fn delete_expired(&self) -> session_store::Result<()> {
        let removed = self.purge_expired().await;
        if removed > 0 {
            tracing::debug!(removed, "Removed expired sessions");
        }
        Ok(())
    }
}

/// Sweep expired sessions from `store` every `period`, forever.
///
/// Spawned by the binary next to the server.
pub async fn delete_expired_sessions(store: FormSessionStore, period: Duration) {
    let mut interval = tokio::time::interval(period);
    // The first tick completes immediately
    interval.tick().await;
    loop {
        interval.tick().await;
        if let Err(e) = store.delete_expired().await {
            tracing::warn!(error = %e, "Failed to delete expired sessions");
        }
    }
}

/// Create the session layer around the shared in-memory store.
///
/// # Arguments
///
/// * `store` - Session store, also handed to [`delete_expired_sessions`]
/// * `config` - Web configuration (for the secure-cookie decision)
#[must_use]
pub fn create_session_layer(
    store: FormSessionStore,
    config: &WebConfig,
) -> SessionManagerLayer<FormSessionStore> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
