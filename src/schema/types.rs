//! View description types
//!
//! A `ViewDef` names a raw table (`{name}_raw`) and a view (`{name}`)
//! projecting typed columns out of the raw payload. Field names are
//! snake_case here; `SchemaLoader` folds the case of incoming keys
//! before decoding into these types.

use serde::{Deserialize, Serialize};

/// One projected column of the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column alias in the view, also part of the index name
    #[serde(default)]
    pub name: String,
    /// SQL scalar expression evaluated against the raw row, kept verbatim
    #[serde(default)]
    pub expr: String,
    /// Whether an expression index is created on the raw table.
    ///
    /// The index name embeds a hash of `expr`, so any textual change to
    /// the expression (even whitespace) produces a new index.
    #[serde(default)]
    pub with_index: bool,
}

impl ColumnDef {
    /// Create a non-indexed column
    pub fn new(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expr: expr.into(),
            with_index: false,
        }
    }

    /// Create a column backed by an expression index
    pub fn indexed(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            with_index: true,
            ..Self::new(name, expr)
        }
    }
}

/// Full view description, the compiler's only input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDef {
    /// View name; the raw table is named `{name}_raw`
    #[serde(default)]
    pub name: String,
    /// Projected columns, in SELECT order
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    /// Suppresses the INSTEAD OF triggers
    #[serde(default)]
    pub skip_triggers: bool,
    /// Suppresses index creation and orphan cleanup
    #[serde(default)]
    pub skip_indices: bool,
    /// Drops managed indices that are no longer declared
    #[serde(default)]
    pub unsafe_drop_orphan_indices: bool,
}

impl ViewDef {
    /// Create an empty description for the given view name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a column
    pub fn with_column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn skip_triggers(mut self, skip: bool) -> Self {
        self.skip_triggers = skip;
        self
    }

    pub fn skip_indices(mut self, skip: bool) -> Self {
        self.skip_indices = skip;
        self
    }

    pub fn unsafe_drop_orphan_indices(mut self, enabled: bool) -> Self {
        self.unsafe_drop_orphan_indices = enabled;
        self
    }

    /// Columns that request an expression index, in declaration order
    pub fn indexed_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.with_index)
    }
}
