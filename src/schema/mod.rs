//! View description subsystem
//!
//! A view description declares a raw table holding opaque records and a
//! view projecting typed columns out of them.
//!
//! # Design Principles
//!
//! - Descriptions are decoded, validated, compiled and discarded
//! - Expressions are opaque strings, never parsed
//! - Validation rejects before any SQL text exists

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use types::{ColumnDef, ViewDef};
pub use validator::validate;
