use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors.
///
/// The client-facing surface is deliberately flat: everything answers
/// 400 `{"Error": "Invalid Request"}` except a missing record, which is
/// 404 `{"Error": "Not found"}`. Detail goes to the log only.
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    NotFound,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound => write!(f, "Resource not found"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound => {
                return (StatusCode::NOT_FOUND, Json(json!({ "Error": "Not found" })))
                    .into_response();
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
            }
            Self::Validation(errors) => {
                tracing::debug!("Validation failed: {}", errors);
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
            }
        }

        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "Error": "Invalid Request" })),
        )
            .into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = WebError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "Error": "Not found" }));
    }

    #[tokio::test]
    async fn test_storage_errors_map_to_400() {
        let error = WebError::Storage(StorageError::InvalidId("bad shape".to_string()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "Error": "Invalid Request" })
        );
    }

    #[tokio::test]
    async fn test_validation_errors_map_to_400() {
        let mut errors = ValidationErrors::new();
        errors.add("reps", validator::ValidationError::new("range"));

        let response = WebError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "Error": "Invalid Request" })
        );
    }
}
