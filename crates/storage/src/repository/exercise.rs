use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::Collection;
use validator::Validate;

use crate::dto::exercise::{ExerciseFilter, ExerciseRequest};
use crate::error::{Result, StorageError};
use crate::models::Exercise;

pub const COLLECTION: &str = "exercises";

pub struct ExerciseRepository<'a> {
    db: &'a mongodb::Database,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(db: &'a mongodb::Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Exercise> {
        self.db.collection::<Exercise>(COLLECTION)
    }

    /// Create a new exercise. The id is assigned here and returned with the
    /// persisted record.
    pub async fn create(&self, request: &ExerciseRequest) -> Result<Exercise> {
        validate(request)?;

        let exercise = Exercise {
            id: ObjectId::new(),
            name: request.name.clone(),
            reps: request.reps,
            weight: request.weight,
            unit: request.unit.clone(),
            date: request.date.clone(),
        };

        self.collection().insert_one(&exercise).await?;

        Ok(exercise)
    }

    /// Find every exercise matching the filter. No ordering guarantee
    /// beyond the store's default.
    pub async fn find(&self, filter: ExerciseFilter) -> Result<Vec<Exercise>> {
        let cursor = self.collection().find(filter.into_document()?).await?;
        let exercises = cursor.try_collect().await?;

        Ok(exercises)
    }

    /// Find one exercise by id. `None` means no record has that id; a
    /// malformed id is an `InvalidId` error instead.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Exercise>> {
        let id = parse_id(id)?;
        let exercise = self.collection().find_one(doc! { "_id": id }).await?;

        Ok(exercise)
    }

    /// Overwrite every field of the exercise at `id`, keeping the id.
    /// Returns the number of records matched (0 when no such id exists), so
    /// a replace that leaves the stored values unchanged still counts as 1.
    pub async fn replace(&self, id: &str, request: &ExerciseRequest) -> Result<u64> {
        validate(request)?;

        let id = parse_id(id)?;
        let replacement = Exercise {
            id,
            name: request.name.clone(),
            reps: request.reps,
            weight: request.weight,
            unit: request.unit.clone(),
            date: request.date.clone(),
        };

        let result = self
            .collection()
            .replace_one(doc! { "_id": id }, &replacement)
            .await?;

        Ok(result.matched_count)
    }

    /// Delete the exercise at `id`. Returns the deleted count; absence is 0,
    /// not an error.
    pub async fn delete_by_id(&self, id: &str) -> Result<u64> {
        let id = parse_id(id)?;
        let result = self.collection().delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count)
    }
}

fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| StorageError::InvalidId(e.to_string()))
}

// Storage-side enforcement of the shared ruleset; the collection's
// `$jsonSchema` validator backs this up on the server.
fn validate(request: &ExerciseRequest) -> Result<()> {
    request
        .validate()
        .map_err(|e| StorageError::ConstraintViolation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_hex_object_ids() {
        let id = ObjectId::new();
        assert_eq!(parse_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_other_shapes() {
        for id in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert!(matches!(parse_id(id), Err(StorageError::InvalidId(_))));
        }
    }

    #[test]
    fn test_validate_maps_rule_failures_to_constraint_violations() {
        let request = ExerciseRequest {
            name: "Squat".to_string(),
            reps: 0,
            weight: 100,
            unit: "kgs".to_string(),
            date: "03-01-24".to_string(),
        };

        assert!(matches!(
            validate(&request),
            Err(StorageError::ConstraintViolation(_))
        ));
    }
}
