//! HTTP API application wiring (Axum router + store wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use roster_store::UserStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The store handle is injected here once; handlers receive it as an
/// `Extension` rather than reaching for any global connection state.
pub fn build_app(store: Arc<dyn UserStore>) -> Router {
    routes::router()
        .layer(Extension(store))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
