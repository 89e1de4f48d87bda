//! Compiler error types
//!
//! Compilation either returns the full script or one of these errors;
//! partial output is never exposed.

use std::fmt;

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for compilation
pub type CompileResult<T> = Result<T, CompileError>;

/// Compilation errors
#[derive(Debug, Error)]
pub enum CompileError {
    /// The description was rejected before any text was generated
    #[error("Invalid schema: {0}")]
    InvalidSchema(#[from] SchemaError),

    /// Writing the script text failed; indicates a bug, not bad input
    #[error("Failed assembling SQL script: {0}")]
    Compilation(#[from] fmt::Error),
}

impl CompileError {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::InvalidSchema(_) => "RECORDLITE_INVALID_SCHEMA",
            CompileError::Compilation(_) => "RECORDLITE_COMPILATION_FAILED",
        }
    }

    /// Returns whether the caller supplied a bad description
    pub fn is_usage_error(&self) -> bool {
        matches!(self, CompileError::InvalidSchema(_))
    }
}
