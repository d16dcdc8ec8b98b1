use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_exercise, delete_exercise, get_exercise, list_exercises, replace_exercise,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_exercise))
        .route("/", get(list_exercises))
        .route("/:id", get(get_exercise))
        .route("/:id", put(replace_exercise))
        .route("/:id", delete(delete_exercise))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::json;
    use storage::Database;
    use tower::ServiceExt;

    use super::*;

    // The driver connects lazily, so the router can be built without a
    // running store; these requests are rejected before any handler runs.
    async fn app() -> Router {
        let db = Database::new("mongodb://localhost:27017", "exercises")
            .await
            .unwrap();
        Router::new().nest("/exercises", routes()).with_state(db)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_with_missing_field_answers_flat_400() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/exercises")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"Bench Press","weight":135,"unit":"lbs","date":"01-30-22"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "Error": "Invalid Request" }));
    }

    #[tokio::test]
    async fn test_post_with_mistyped_field_answers_flat_400() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/exercises")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"Bench Press","reps":"five","weight":135,"unit":"lbs","date":"01-30-22"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "Error": "Invalid Request" }));
    }

    #[tokio::test]
    async fn test_put_with_malformed_body_answers_flat_400() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/exercises/65f000000000000000000000")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "Error": "Invalid Request" }));
    }

    #[tokio::test]
    async fn test_list_with_non_numeric_reps_answers_flat_400() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/exercises?reps=five")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "Error": "Invalid Request" }));
    }
}
