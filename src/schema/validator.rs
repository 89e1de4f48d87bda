//! Structural validation of view descriptions
//!
//! Only naming is checked. Column expressions are opaque and are never
//! parsed, so a description that passes here may still produce SQL the
//! engine rejects.

use std::collections::HashSet;

use super::errors::{SchemaError, SchemaResult};
use super::types::ViewDef;

/// Validates a description before any SQL is generated.
///
/// Rejects an empty view name, empty column names and duplicate column
/// names. Duplicates would yield a view with ambiguous aliases and, when
/// indexed with the same expression, two identical index statements.
pub fn validate(def: &ViewDef) -> SchemaResult<()> {
    if def.name.is_empty() {
        return Err(SchemaError::EmptyViewName);
    }

    let mut seen = HashSet::with_capacity(def.columns.len());
    for (position, column) in def.columns.iter().enumerate() {
        if column.name.is_empty() {
            return Err(SchemaError::EmptyColumnName { position });
        }
        if !seen.insert(column.name.as_str()) {
            return Err(SchemaError::DuplicateColumn {
                name: column.name.clone(),
            });
        }
    }

    Ok(())
}
