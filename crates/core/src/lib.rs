//! `roster-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types for the user roster (no
//! infrastructure concerns: no HTTP, no driver types beyond the opaque id).

pub mod error;
pub mod id;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use user::{NewUser, User};
