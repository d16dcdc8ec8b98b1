use storage::{
    dto::exercise::{ExerciseFilter, ExerciseRequest},
    error::Result,
    models::Exercise,
    repository::exercise::ExerciseRepository,
};

/// Create a new exercise
pub async fn create_exercise(db: &mongodb::Database, request: &ExerciseRequest) -> Result<Exercise> {
    let repo = ExerciseRepository::new(db);
    repo.create(request).await
}

/// List exercises matching the filter
pub async fn list_exercises(db: &mongodb::Database, filter: ExerciseFilter) -> Result<Vec<Exercise>> {
    let repo = ExerciseRepository::new(db);
    repo.find(filter).await
}

/// Get one exercise by id
pub async fn get_exercise(db: &mongodb::Database, id: &str) -> Result<Option<Exercise>> {
    let repo = ExerciseRepository::new(db);
    repo.find_by_id(id).await
}

/// Replace every field of an exercise, returning the matched count
pub async fn replace_exercise(
    db: &mongodb::Database,
    id: &str,
    request: &ExerciseRequest,
) -> Result<u64> {
    let repo = ExerciseRepository::new(db);
    repo.replace(id, request).await
}

/// Delete an exercise by id, returning the deleted count
pub async fn delete_exercise(db: &mongodb::Database, id: &str) -> Result<u64> {
    let repo = ExerciseRepository::new(db);
    repo.delete_by_id(id).await
}
