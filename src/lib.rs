//! recordlite - schema-on-read views over raw SQLite records
//!
//! Compiles a declarative view description into a SQL script that
//! creates a raw table of opaque records, a view projecting typed
//! columns from them, write-through triggers and expression indices.
//!
//! ```
//! use recordlite::compiler::compile;
//! use recordlite::schema::{ColumnDef, ViewDef};
//!
//! let def = ViewDef::new("events")
//!     .with_column(ColumnDef::indexed("ts", "json_extract(raw,'$.ts')"));
//! let sql = compile(&def).unwrap();
//! assert!(sql.starts_with("BEGIN EXCLUSIVE;"));
//! ```

pub mod cli;
pub mod compiler;
pub mod observability;
pub mod schema;
