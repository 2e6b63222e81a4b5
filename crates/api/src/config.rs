//! Process configuration, read from the environment.

use anyhow::Context;

const DEFAULT_PORT: u16 = 4000;

/// Runtime configuration.
///
/// `MONGO_URI` is required: without a reachable store every request is
/// doomed to fail, so startup refuses to proceed rather than binding a
/// socket it cannot serve.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongo_uri: String,
    /// Overrides the database named in the URI; `None` falls back to the
    /// URI default, then to the store's built-in default.
    pub mongo_db: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let mongo_uri = std::env::var("MONGO_URI").context("MONGO_URI must be set")?;
        let mongo_db = std::env::var("MONGO_DB").ok().filter(|s| !s.is_empty());

        Ok(Self {
            port,
            mongo_uri,
            mongo_db,
        })
    }
}
