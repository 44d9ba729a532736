//! Per-sender session storage
//!
//! The engine only talks to the [`SessionStore`] trait, so the in-memory map
//! can be swapped for an evicting store without touching the state machine.

mod memory;

pub use memory::InMemorySessionStore;

use crate::state_machine::Stage;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// One sender's place in the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub stage: Stage,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    /// Fresh session at the root menu
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            stage: Stage::Main,
            last_seen: now,
        }
    }
}

/// Storage for sender sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get a sender's session, if one exists
    async fn get(&self, sender_id: &str) -> Option<Session>;

    /// Insert or replace a sender's session (last write wins)
    async fn upsert(&self, sender_id: &str, session: Session);

    /// Drop sessions not seen since `cutoff`, returning how many were removed
    async fn evict_idle(&self, cutoff: DateTime<Utc>) -> usize;

    /// Number of live sessions
    async fn count(&self) -> usize;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn get(&self, sender_id: &str) -> Option<Session> {
        (**self).get(sender_id).await
    }

    async fn upsert(&self, sender_id: &str, session: Session) {
        (**self).upsert(sender_id, session).await;
    }

    async fn evict_idle(&self, cutoff: DateTime<Utc>) -> usize {
        (**self).evict_idle(cutoff).await
    }

    async fn count(&self) -> usize {
        (**self).count().await
    }
}
