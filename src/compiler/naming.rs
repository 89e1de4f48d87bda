//! Deterministic object names
//!
//! These names are the only link between a compiled script and a live
//! database built by an earlier compilation. Changing any format here
//! orphans every object created with the previous one.

use sha1::{Digest, Sha1};

use crate::schema::{ColumnDef, ViewDef};

/// Prefix of every index managed by the compiler.
///
/// Orphan cleanup only ever touches indices carrying this prefix.
pub const INDEX_PREFIX: &str = "_col_expr";

/// Name of the physical table holding raw records
pub fn table_name(def: &ViewDef) -> String {
    format!("{}_raw", def.name)
}

/// Name of the projecting view
pub fn view_name(def: &ViewDef) -> &str {
    &def.name
}

/// Name of the INSTEAD OF trigger for `action` (`insert`, `update`, `delete`)
pub fn trigger_name(def: &ViewDef, action: &str) -> String {
    format!("{}_{}", view_name(def), action)
}

/// Lowercase hex SHA-1 of the exact expression bytes
pub fn expr_digest(expr: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(expr.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Index name for a column: `_col_expr_{name}_{sha1(expr)}`
pub fn index_name(column: &ColumnDef) -> String {
    format!("{}_{}_{}", INDEX_PREFIX, column.name, expr_digest(&column.expr))
}

/// Names of every index the current description declares, in column order.
///
/// Returned regardless of `skip_indices`; this is the set orphan cleanup
/// keeps.
pub fn index_names(def: &ViewDef) -> Vec<String> {
    def.indexed_columns().map(index_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_view_names() {
        let def = ViewDef::new("events");
        assert_eq!(table_name(&def), "events_raw");
        assert_eq!(view_name(&def), "events");
        assert_eq!(trigger_name(&def, "insert"), "events_insert");
    }

    #[test]
    fn test_expr_digest_is_sha1_hex() {
        let digest = expr_digest("json_extract(raw,'$.ts')");
        assert_eq!(digest, "bd893ed513bf00ae717d29fd81766926ae268d0c");
        assert_eq!(digest.len(), 40);
    }

    #[test]
    fn test_index_name_format() {
        let column = ColumnDef::indexed("ts", "json_extract(raw,'$.ts')");
        assert_eq!(
            index_name(&column),
            "_col_expr_ts_bd893ed513bf00ae717d29fd81766926ae268d0c"
        );
    }

    #[test]
    fn test_cosmetic_change_renames_index() {
        let compact = ColumnDef::indexed("ts", "json_extract(raw,'$.ts')");
        let spaced = ColumnDef::indexed("ts", "json_extract(raw, '$.ts')");
        let upper = ColumnDef::indexed("ts", "JSON_EXTRACT(raw,'$.ts')");

        assert_ne!(index_name(&compact), index_name(&spaced));
        assert_ne!(index_name(&compact), index_name(&upper));
        assert_eq!(
            index_name(&spaced),
            "_col_expr_ts_32ce91e396440a52fc54089ed83a35a3ea0fe538"
        );
    }

    #[test]
    fn test_index_names_only_indexed_columns() {
        let def = ViewDef::new("events")
            .with_column(ColumnDef::indexed("ts", "json_extract(raw,'$.ts')"))
            .with_column(ColumnDef::new("body", "raw"))
            .with_column(ColumnDef::indexed("kind", "json_extract(raw,'$.kind')"));

        assert_eq!(
            index_names(&def),
            vec![
                "_col_expr_ts_bd893ed513bf00ae717d29fd81766926ae268d0c".to_string(),
                "_col_expr_kind_71830e88512c488f6aae71e241a1c8463e905bf2".to_string(),
            ]
        );
    }
}
