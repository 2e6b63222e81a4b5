use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use roster_store::UserStore;

pub async fn hello() -> &'static str {
    "Hello World!"
}

/// Readiness probe: the service is only healthy when the store answers.
pub async fn health(
    Extension(store): Extension<Arc<dyn UserStore>>,
) -> axum::response::Response {
    match store.ping().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": "unavailable" })),
            )
                .into_response()
        }
    }
}
