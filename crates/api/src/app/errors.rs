use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use roster_core::DomainError;
use roster_store::StoreError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

/// Store failures are logged in full server-side; the client only sees a
/// stable code, never the underlying driver error.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Unavailable(_) => {
            tracing::error!(error = %err, "store unavailable");
            json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                "persistence layer unavailable",
            )
        }
        StoreError::Malformed(_) => {
            tracing::error!(error = %err, "store returned malformed data");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")
        }
    }
}

/// A body that failed to parse as the typed request DTO (missing field,
/// wrong type, invalid JSON) is a validation error.
pub fn body_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn parts(resp: axum::response::Response) -> (StatusCode, serde_json::Value) {
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unavailable_store_is_503_without_driver_detail() {
        let err = StoreError::Unavailable("connection refused: 10.0.0.1:27017".to_string());
        let (status, body) = parts(store_error_to_response(err)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "store_unavailable");
        // The driver error stays in the server log, not in the response.
        assert!(!body["message"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn malformed_store_data_is_500_without_driver_detail() {
        let err = StoreError::Malformed("unexpected field `agee`".to_string());
        let (status, body) = parts(store_error_to_response(err)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");
        assert!(!body["message"].as_str().unwrap().contains("agee"));
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = DomainError::validation("name must not be empty");
        let (status, body) = parts(domain_error_to_response(err)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn invalid_id_is_400() {
        let err = DomainError::invalid_id("UserId: not hex");
        let (status, body) = parts(domain_error_to_response(err)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_id");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = parts(domain_error_to_response(DomainError::NotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}
