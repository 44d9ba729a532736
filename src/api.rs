//! HTTP webhook for the SMS gateway
//!
//! `GET /` answers uptime checks, `POST /sms` receives inbound messages and
//! replies with a TwiML envelope.

mod handlers;
mod twiml;
mod types;

pub use handlers::create_router;

use crate::engine::ConversationEngine;
use crate::session::SessionStore;
use std::sync::Arc;

/// Engine over a type-erased session store
pub type SharedEngine = Arc<ConversationEngine<Arc<dyn SessionStore>>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: SharedEngine,
}

impl AppState {
    pub fn new(engine: SharedEngine) -> Self {
        Self { engine }
    }
}
