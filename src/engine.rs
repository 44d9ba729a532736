//! Conversation engine
//!
//! Loads a sender's session, runs one transition, and writes the new stage
//! back before handing the reply to the transport.

use crate::catalog::Catalog;
use crate::session::{Session, SessionStore};
use crate::state_machine::{transition, Input, TransitionError};
use chrono::{Duration, Utc};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Request has no sender")]
    MissingSender,
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

pub struct ConversationEngine<S> {
    catalog: Arc<Catalog>,
    sessions: S,
}

impl<S: SessionStore> ConversationEngine<S> {
    pub fn new(catalog: Arc<Catalog>, sessions: S) -> Self {
        Self { catalog, sessions }
    }

    #[cfg(test)]
    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Handle one inbound message and return the reply text
    ///
    /// Concurrent messages from the same sender race; whichever writes last
    /// wins.
    pub async fn handle_message(&self, sender_id: &str, body: &str) -> Result<String, EngineError> {
        let sender_id = sender_id.trim();
        if sender_id.is_empty() {
            return Err(EngineError::MissingSender);
        }

        let now = Utc::now();
        let session = if let Some(session) = self.sessions.get(sender_id).await {
            session
        } else {
            tracing::info!(sender = %sender_id, "New session");
            Session::new(now)
        };

        let result = transition(&session.stage, &self.catalog, Input::parse(body)).inspect_err(|e| {
            tracing::error!(
                sender = %sender_id,
                stage = ?session.stage,
                error = %e,
                "Transition failed"
            );
        })?;

        tracing::debug!(
            sender = %sender_id,
            from = session.stage.name(),
            to = result.new_stage.name(),
            scheme = ?result.new_stage.selected_scheme(),
            "Transition"
        );

        self.sessions
            .upsert(
                sender_id,
                Session {
                    stage: result.new_stage,
                    last_seen: now,
                },
            )
            .await;

        Ok(result.reply)
    }

    /// Drop sessions idle for longer than `ttl`
    ///
    /// A `ttl` reaching past the earliest representable time evicts nothing.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let Some(cutoff) = Utc::now().checked_sub_signed(ttl) else {
            tracing::warn!(
                ttl_secs = ttl.num_seconds(),
                "Session TTL out of range, skipping sweep"
            );
            return 0;
        };

        let removed = self.sessions.evict_idle(cutoff).await;
        if removed > 0 {
            let remaining = self.sessions.count().await;
            tracing::info!(removed, remaining, "Evicted idle sessions");
        }
        removed
    }
}
