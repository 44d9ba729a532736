//! In-memory session store

use super::{Session, SessionStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-lifetime session map
///
/// Grows with every new sender unless `evict_idle` is called periodically.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, sender_id: &str) -> Option<Session> {
        self.sessions.read().await.get(sender_id).cloned()
    }

    async fn upsert(&self, sender_id: &str, session: Session) {
        self.sessions
            .write()
            .await
            .insert(sender_id.to_string(), session);
    }

    async fn evict_idle(&self, cutoff: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen >= cutoff);
        before - sessions.len()
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
