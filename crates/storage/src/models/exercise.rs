use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A persisted exercise record. The `_id` is assigned when the record is
/// created and never changes; replace keeps it while overwriting the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub reps: i32,
    pub weight: i32,
    pub unit: String,
    pub date: String,
}
