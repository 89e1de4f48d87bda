//! Schema compiler
//!
//! Turns a `ViewDef` into a SQLite script implementing schema-on-read
//! over an append-style raw table:
//!
//! - `{name}_raw`: `id` + opaque `raw` payload
//! - `{name}`: view projecting each column expression
//! - INSTEAD OF triggers writing `raw` through the view
//! - expression indices named `_col_expr_{column}_{sha1(expr)}`
//!
//! The compiler is a pure function. It holds no state, performs no I/O
//! and may be called from any number of threads at once.
//!
//! # Orphan cleanup
//!
//! With `unsafe_drop_orphan_indices`, the script deletes every index on
//! the raw table whose name carries the managed prefix but is not in the
//! current index set. It edits `sqlite_master` under
//! `PRAGMA writable_schema`, which is engine specific and races with
//! concurrent DDL from other connections. Callers must guarantee
//! exclusive access to the database while the script runs.

mod compiler;
mod errors;
mod naming;
mod statements;

pub use compiler::compile;
pub use errors::{CompileError, CompileResult};
pub use naming::{expr_digest, index_name, index_names, table_name, trigger_name, view_name, INDEX_PREFIX};
