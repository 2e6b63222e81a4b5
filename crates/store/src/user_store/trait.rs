use async_trait::async_trait;
use thiserror::Error;

use roster_core::{NewUser, User, UserId};

/// Store-level failure.
///
/// "Not found" is never an error here: lookups that match nothing return
/// `Ok(None)` so callers can map it to their own taxonomy (the HTTP layer
/// turns it into 404). Errors are reserved for the infrastructure itself.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached (connectivity, pool, timeout).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The driver produced or received data it could not map.
    #[error("malformed store data: {0}")]
    Malformed(String),
}

/// Persistence operations over the user collection.
///
/// All operations are async and touch exactly one record (or the whole
/// collection for `list_all`); consistency of concurrent writes to the same
/// record is delegated to the backend (last-write-wins).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Full sequence of records in store (insertion) order.
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    /// Persist a new record; assigns id and timestamps
    /// (`created_at == updated_at` on the returned record).
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;

    /// Full replace of `name`/`age`; bumps `updated_at`, preserves
    /// `created_at`. `Ok(None)` when no record matches.
    async fn update(&self, id: UserId, new: NewUser) -> Result<Option<User>, StoreError>;

    /// Remove by id, returning the removed record. `Ok(None)` when nothing
    /// matched, so a repeated delete is not an error.
    async fn delete(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Connectivity probe used by startup gating and `/health`.
    async fn ping(&self) -> Result<(), StoreError>;
}
