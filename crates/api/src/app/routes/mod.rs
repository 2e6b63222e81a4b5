use axum::{routing::get, Router};

pub mod system;
pub mod users;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::hello))
        .route("/health", get(system::health))
        .nest("/users", users::router())
}
