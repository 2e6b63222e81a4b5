//! Startup wiring: store connection gating and shutdown signal.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use roster_store::{MongoUserStore, UserStore};

use crate::config::Config;

const CONNECT_ATTEMPTS: u32 = 5;
const BACKOFF_START: Duration = Duration::from_millis(500);

/// Connect to MongoDB and verify reachability before the socket opens.
///
/// Pings with doubling backoff between attempts; if the store is still
/// unreachable after the last attempt, startup aborts instead of accepting
/// requests that are guaranteed to fail.
pub async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn UserStore>> {
    let store = MongoUserStore::connect(&config.mongo_uri, config.mongo_db.as_deref())
        .await
        .context("invalid MONGO_URI")?;

    let mut delay = BACKOFF_START;
    let mut attempt = 0;
    loop {
        attempt += 1;
        match store.ping().await {
            Ok(()) => {
                tracing::info!(attempt, "connected to mongodb");
                return Ok(Arc::new(store));
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(attempt, error = %e, "mongodb not reachable, retrying");
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                return Err(e).context("mongodb unreachable after retries");
            }
        }
    }
}

/// Resolves on the first shutdown signal the process receives.
///
/// Listens for Ctrl-C everywhere and SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
