use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when the server rejected a write because the document failed
    /// the collection's validation schema (code 121).
    pub fn is_schema_violation(&self) -> bool {
        use mongodb::error::{ErrorKind, WriteFailure};

        matches!(
            self,
            StorageError::Database(e)
                if matches!(&*e.kind, ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 121)
        )
    }
}
