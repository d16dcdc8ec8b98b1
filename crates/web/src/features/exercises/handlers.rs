use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::exercise::{ExerciseFilter, ExerciseRequest, ExerciseResponse},
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::{Json, Query};

use super::services;

#[utoipa::path(
    post,
    path = "/exercises",
    request_body = ExerciseRequest,
    responses(
        (status = 201, description = "Exercise created successfully", body = ExerciseResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(db): State<Database>,
    Json(req): Json<ExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = services::create_exercise(db.handle(), &req).await?;

    Ok((StatusCode::CREATED, Json(ExerciseResponse::from(exercise))).into_response())
}

#[utoipa::path(
    get,
    path = "/exercises",
    params(ExerciseFilter),
    responses(
        (status = 201, description = "Matching exercises (empty array if none)", body = Vec<ExerciseResponse>),
        (status = 400, description = "Invalid request")
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(db): State<Database>,
    Query(filter): Query<ExerciseFilter>,
) -> Result<Response, WebError> {
    let exercises = services::list_exercises(db.handle(), filter).await?;

    let response: Vec<ExerciseResponse> =
        exercises.into_iter().map(ExerciseResponse::from).collect();

    // Listing has always replied 201; kept for client compatibility.
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/exercises/{id}",
    params(
        ("id" = String, Path, description = "Exercise id")
    ),
    responses(
        (status = 200, description = "Exercise found", body = ExerciseResponse),
        (status = 404, description = "Exercise not found"),
        (status = 400, description = "Invalid request")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let exercise = services::get_exercise(db.handle(), &id)
        .await?
        .ok_or(WebError::NotFound)?;

    Ok(Json(ExerciseResponse::from(exercise)).into_response())
}

#[utoipa::path(
    put,
    path = "/exercises/{id}",
    params(
        ("id" = String, Path, description = "Exercise id")
    ),
    request_body = ExerciseRequest,
    responses(
        (status = 200, description = "Exercise replaced successfully", body = ExerciseResponse),
        (status = 404, description = "Exercise not found"),
        (status = 400, description = "Invalid request")
    ),
    tag = "exercises"
)]
pub async fn replace_exercise(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(req): Json<ExerciseRequest>,
) -> Result<Response, WebError> {
    let matched = services::replace_exercise(db.handle(), &id, &req).await?;
    if matched == 0 {
        return Err(WebError::NotFound);
    }

    // Echo of the submitted fields merged with the path id.
    Ok(Json(ExerciseResponse {
        id,
        name: req.name,
        reps: req.reps,
        weight: req.weight,
        unit: req.unit,
        date: req.date,
    })
    .into_response())
}

#[utoipa::path(
    delete,
    path = "/exercises/{id}",
    params(
        ("id" = String, Path, description = "Exercise id")
    ),
    responses(
        (status = 204, description = "Exercise deleted successfully"),
        (status = 404, description = "Exercise not found"),
        (status = 400, description = "Invalid request")
    ),
    tag = "exercises"
)]
pub async fn delete_exercise(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let deleted = services::delete_exercise(db.handle(), &id).await?;
    if deleted == 0 {
        return Err(WebError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
