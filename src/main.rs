//! Kisan Mitra - SMS menu bot for farmer support schemes
//!
//! Answers inbound SMS webhooks with scheme information, navigated through a
//! two-level numeric menu kept per sender.

mod api;
mod catalog;
mod config;
mod engine;
mod menu;
mod session;
mod state_machine;

use api::{create_router, AppState, SharedEngine};
use catalog::Catalog;
use config::Config;
use engine::ConversationEngine;
use session::{InMemorySessionStore, SessionStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kisan_mitra=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = Config::from_env();

    let catalog = Arc::new(Catalog::builtin()?);
    if catalog.is_empty() {
        tracing::warn!("Scheme catalog is empty; every selection will be invalid");
    }
    tracing::info!(schemes = catalog.len(), "Catalog loaded");

    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let engine: SharedEngine = Arc::new(ConversationEngine::new(catalog, store));

    let sweeper = config
        .session_ttl
        .map(|ttl| spawn_session_sweeper(Arc::clone(&engine), ttl, config.sweep_interval));
    if sweeper.is_none() {
        tracing::info!("SESSION_TTL_SECS not set; sessions are kept for the process lifetime");
    }

    let app = create_router(AppState::new(engine)).layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Kisan Mitra SMS bot listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    tracing::info!("Server stopped");

    Ok(())
}

/// Periodically forget senders idle longer than `ttl`
fn spawn_session_sweeper(
    engine: SharedEngine,
    ttl: chrono::Duration,
    every: std::time::Duration,
) -> JoinHandle<()> {
    tracing::info!(
        ttl_secs = ttl.num_seconds(),
        sweep_secs = every.as_secs(),
        "Session eviction enabled"
    );
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // First tick fires immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            engine.evict_idle(ttl).await;
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
