use bson::{Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{Result, StorageError};
use crate::schema;

/// Request payload for creating or replacing an exercise. Both operations
/// take the full field set; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExerciseRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(range(min = 1, message = "Reps must be at least 1"))]
    pub reps: i32,

    #[validate(range(min = 1, message = "Weight must be at least 1"))]
    pub weight: i32,

    #[validate(custom(function = "validate_unit"))]
    pub unit: String,

    #[validate(custom(function = "validate_date"))]
    pub date: String,
}

/// Response containing one exercise record, id rendered as its hex form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    pub id: String,
    pub name: String,
    pub reps: i32,
    pub weight: i32,
    pub unit: String,
    pub date: String,
}

/// Exact-match filters for listing exercises. Absent fields are
/// unconstrained; present fields are ANDed together.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ExerciseFilter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub reps: Option<i32>,
    pub weight: Option<i32>,
    pub unit: Option<String>,
    pub date: Option<String>,
}

impl ExerciseFilter {
    /// Builds the query document. A present id must have a valid identifier
    /// shape; that failure is an error, not an empty result.
    pub fn into_document(self) -> Result<Document> {
        let mut filter = Document::new();

        if let Some(id) = self.id {
            let id = ObjectId::parse_str(&id)
                .map_err(|e| StorageError::InvalidId(e.to_string()))?;
            filter.insert("_id", id);
        }
        if let Some(name) = self.name {
            filter.insert("name", name);
        }
        if let Some(reps) = self.reps {
            filter.insert("reps", reps);
        }
        if let Some(weight) = self.weight {
            filter.insert("weight", weight);
        }
        if let Some(unit) = self.unit {
            filter.insert("unit", unit);
        }
        if let Some(date) = self.date {
            filter.insert("date", date);
        }

        Ok(filter)
    }
}

// Validation helpers backed by the shared ruleset in `schema`.

fn validate_unit(unit: &str) -> std::result::Result<(), validator::ValidationError> {
    if schema::UNITS.contains(&unit) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_unit"))
    }
}

fn validate_date(date: &str) -> std::result::Result<(), validator::ValidationError> {
    if schema::DATE_FORMAT.is_match(date) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_date"))
    }
}

impl From<crate::models::Exercise> for ExerciseResponse {
    fn from(exercise: crate::models::Exercise) -> Self {
        Self {
            id: exercise.id.to_hex(),
            name: exercise.name,
            reps: exercise.reps,
            weight: exercise.weight,
            unit: exercise.unit,
            date: exercise.date,
        }
    }
}
