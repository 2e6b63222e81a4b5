//! `roster-store` — persistence for user records.
//!
//! Exposes the [`UserStore`] trait plus two backends: MongoDB for
//! production and an in-memory store for tests/dev.

pub mod user_store;

pub use user_store::in_memory::InMemoryUserStore;
pub use user_store::mongo::MongoUserStore;
pub use user_store::r#trait::{StoreError, UserStore};
