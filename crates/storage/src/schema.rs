//! Field constraints for exercise records.
//!
//! This is the one place the ruleset lives: the request validators in
//! [`crate::dto`] and the collection validator installed by
//! [`crate::Database::ensure_schema`] both read from here.

use std::sync::LazyLock;

use bson::{Document, doc};
use regex::Regex;

pub const NAME_MIN_LENGTH: u64 = 1;
pub const MIN_REPS: i32 = 1;
pub const MIN_WEIGHT: i32 = 1;
pub const UNITS: &[&str] = &["kgs", "lbs"];

/// Two-digit month, day and year, dash-delimited (MM-DD-YY).
pub const DATE_PATTERN: &str = r"^\d{2}-\d{2}-\d{2}$";

pub static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("date pattern is a valid regex"));

/// `$jsonSchema` document enforced by the collection itself, mirroring the
/// request-side rules so a write that slips past the route layer is still
/// rejected by the store.
pub fn validation_schema() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["name", "reps", "weight", "unit", "date"],
            "properties": {
                "name": { "bsonType": "string", "minLength": NAME_MIN_LENGTH as i64 },
                "reps": { "bsonType": ["int", "long"], "minimum": MIN_REPS },
                "weight": { "bsonType": ["int", "long"], "minimum": MIN_WEIGHT },
                "unit": { "enum": UNITS.to_vec() },
                "date": { "bsonType": "string", "pattern": DATE_PATTERN },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format_accepts_dashed_two_digit_dates() {
        assert!(DATE_FORMAT.is_match("01-30-22"));
        assert!(DATE_FORMAT.is_match("12-01-99"));
    }

    #[test]
    fn test_date_format_rejects_other_shapes() {
        assert!(!DATE_FORMAT.is_match("1-30-22"));
        assert!(!DATE_FORMAT.is_match("01/30/22"));
        assert!(!DATE_FORMAT.is_match("01-30-2022"));
        assert!(!DATE_FORMAT.is_match("2022-01-30"));
        assert!(!DATE_FORMAT.is_match(""));
        assert!(!DATE_FORMAT.is_match("01-30-22 "));
    }

    fn subdocument<'a>(parent: &'a Document, key: &str) -> &'a Document {
        parent.get(key).and_then(|v| v.as_document()).unwrap()
    }

    #[test]
    fn test_validation_schema_requires_every_field() {
        let schema = validation_schema();
        let json_schema = subdocument(&schema, "$jsonSchema");

        let required: Vec<&str> = json_schema
            .get("required")
            .and_then(|v| v.as_array())
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["name", "reps", "weight", "unit", "date"]);

        let properties = subdocument(json_schema, "properties");
        for field in &required {
            assert!(properties.contains_key(*field));
        }
    }

    #[test]
    fn test_validation_schema_constrains_unit_and_date() {
        let schema = validation_schema();
        let json_schema = subdocument(&schema, "$jsonSchema");
        let properties = subdocument(json_schema, "properties");

        let units: Vec<&str> = subdocument(properties, "unit")
            .get("enum")
            .and_then(|v| v.as_array())
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(units, vec!["kgs", "lbs"]);

        let pattern = subdocument(properties, "date")
            .get("pattern")
            .and_then(|v| v.as_str())
            .unwrap();
        assert_eq!(pattern, DATE_PATTERN);
    }
}
