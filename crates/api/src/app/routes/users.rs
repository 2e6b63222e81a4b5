use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use roster_core::{NewUser, UserId};
use roster_store::UserStore;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", put(update_user).delete(delete_user))
}

pub async fn list_users(
    Extension(store): Extension<Arc<dyn UserStore>>,
) -> axum::response::Response {
    match store.list_all().await {
        Ok(users) => {
            let items = users.into_iter().map(dto::user_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    body: Result<Json<dto::UserBodyRequest>, JsonRejection>,
) -> axum::response::Response {
    let new = match parse_body(body) {
        Ok(n) => n,
        Err(resp) => return resp,
    };

    match store.create(new).await {
        Ok(user) => (StatusCode::OK, Json(dto::user_to_json(user))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UserBodyRequest>, JsonRejection>,
) -> axum::response::Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };
    let new = match parse_body(body) {
        Ok(n) => n,
        Err(resp) => return resp,
    };

    match store.update(id, new).await {
        Ok(Some(user)) => (StatusCode::OK, Json(dto::user_to_json(user))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_user(
    Extension(store): Extension<Arc<dyn UserStore>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    match store.delete(id).await {
        Ok(Some(user)) => (StatusCode::OK, Json(dto::user_to_json(user))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Validation boundary shared by create and update: a malformed or partial
/// body is rejected here, before anything reaches the store.
fn parse_body(
    body: Result<Json<dto::UserBodyRequest>, JsonRejection>,
) -> Result<NewUser, axum::response::Response> {
    let Json(body) = body.map_err(errors::body_rejection_to_response)?;
    NewUser::new(body.name, body.age).map_err(errors::domain_error_to_response)
}
