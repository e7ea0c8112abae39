use thiserror::Error;

use crate::record::EntityKind;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{kind} with id={id} not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CoreError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        CoreError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid {0} payload: {1} is required")]
    MissingField(EntityKind, &'static str),

    #[error("Invalid {0} payload: at least one specialization is required")]
    NoSpecializations(EntityKind),

    #[error("Invalid {0} ID")]
    InvalidId(EntityKind),

    #[error("Invalid payload: at least one field must be provided for update")]
    EmptyPatch,

    #[error("Invalid {0}: value is required")]
    EmptyValue(&'static str),

    #[error("Invalid search query: query must not be empty")]
    EmptySearchQuery,

    #[error("Invalid start time or end time")]
    InvalidTimeWindow,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
