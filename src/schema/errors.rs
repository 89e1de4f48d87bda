//! Schema error types
//!
//! Every schema error rejects the description before any SQL is produced.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while loading or validating a view description
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("View name must not be empty")]
    EmptyViewName,

    #[error("Column at position {position} has an empty name")]
    EmptyColumnName { position: usize },

    #[error("Column '{name}' is declared more than once")]
    DuplicateColumn { name: String },

    #[error("Malformed view description '{source_name}': {reason}")]
    Malformed { source_name: String, reason: String },
}

impl SchemaError {
    /// Create an error for an unreadable or undecodable description
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Malformed {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::EmptyViewName => "RECORDLITE_SCHEMA_EMPTY_VIEW_NAME",
            SchemaError::EmptyColumnName { .. } => "RECORDLITE_SCHEMA_EMPTY_COLUMN_NAME",
            SchemaError::DuplicateColumn { .. } => "RECORDLITE_SCHEMA_DUPLICATE_COLUMN",
            SchemaError::Malformed { .. } => "RECORDLITE_SCHEMA_MALFORMED",
        }
    }
}
