//! Statement group writers
//!
//! Each writer appends one group of statements to the script buffer. The
//! text layout is fixed: deployed databases were built from scripts in
//! exactly this shape, and reviewers diff generated scripts between runs.

use std::fmt::{self, Write};

use super::naming::{index_name, index_names, table_name, trigger_name, view_name, INDEX_PREFIX};
use crate::schema::{ColumnDef, ViewDef};

/// Separator between names in the orphan cleanup `NOT IN` list
const INDEX_LIST_SEPARATOR: &str = ",\n    ";

/// `CREATE TABLE IF NOT EXISTS {name}_raw (...)`
pub fn write_table<W: Write>(out: &mut W, def: &ViewDef) -> fmt::Result {
    writeln!(out, "CREATE TABLE IF NOT EXISTS {} (", table_name(def))?;
    writeln!(out, "  id INTEGER PRIMARY KEY NOT NULL,")?;
    writeln!(out, "  raw BLOB NOT NULL")?;
    write!(out, ");")
}

/// Drops and recreates the view so projection changes take effect.
pub fn write_view<W: Write>(out: &mut W, def: &ViewDef) -> fmt::Result {
    let view = view_name(def);

    writeln!(out, "DROP VIEW IF EXISTS {};", view)?;
    writeln!(out, "CREATE VIEW IF NOT EXISTS {} AS", view)?;
    writeln!(out, "SELECT")?;
    writeln!(out, "  id,")?;
    writeln!(out, "  raw{}", if def.columns.is_empty() { "" } else { "," })?;

    let count = def.columns.len();
    for (index, column) in def.columns.iter().enumerate() {
        write_select_expr(out, column, index + 1 == count)?;
    }

    write!(out, "FROM {};", table_name(def))
}

/// `  {expr} AS {name}` followed by a comma unless it is the last column
fn write_select_expr<W: Write>(out: &mut W, column: &ColumnDef, last: bool) -> fmt::Result {
    let comma = if last { "" } else { "," };
    writeln!(out, "  {} AS {}{}", column.expr, column.name, comma)
}

/// INSTEAD OF triggers redirecting view writes to the raw table.
///
/// Only `raw` is ever written; projected columns are ignored.
pub fn write_triggers<W: Write>(out: &mut W, def: &ViewDef) -> fmt::Result {
    let view = view_name(def);
    let table = table_name(def);

    let insert = trigger_name(def, "insert");
    writeln!(out, "DROP TRIGGER IF EXISTS {};", insert)?;
    writeln!(out, "CREATE TRIGGER IF NOT EXISTS {} INSTEAD OF INSERT ON {}", insert, view)?;
    writeln!(out, "BEGIN")?;
    writeln!(out, "  INSERT INTO {}(raw) VALUES(NEW.raw);", table)?;
    writeln!(out, "END;")?;
    writeln!(out)?;

    let update = trigger_name(def, "update");
    writeln!(out, "DROP TRIGGER IF EXISTS {};", update)?;
    writeln!(out, "CREATE TRIGGER IF NOT EXISTS {} INSTEAD OF UPDATE ON {}", update, view)?;
    writeln!(out, "BEGIN")?;
    writeln!(out, "  UPDATE {} SET raw = NEW.raw WHERE id = OLD.id;", table)?;
    writeln!(out, "END;")?;
    writeln!(out)?;

    let delete = trigger_name(def, "delete");
    writeln!(out, "DROP TRIGGER IF EXISTS {};", delete)?;
    writeln!(out, "CREATE TRIGGER IF NOT EXISTS {} INSTEAD OF DELETE ON {}", delete, view)?;
    writeln!(out, "BEGIN")?;
    writeln!(out, "  DELETE FROM {} WHERE id = OLD.id;", table)?;
    write!(out, "END;")
}

/// Expression indices for every indexed column, then the optional
/// orphan cleanup. Each index statement is followed by a blank line.
pub fn write_indices<W: Write>(out: &mut W, def: &ViewDef) -> fmt::Result {
    let table = table_name(def);

    for column in def.indexed_columns() {
        writeln!(out, "CREATE INDEX IF NOT EXISTS {}", index_name(column))?;
        writeln!(out, "  ON {}({});", table, column.expr)?;
        writeln!(out)?;
    }

    if def.unsafe_drop_orphan_indices {
        write_orphan_cleanup(out, def)?;
    }

    Ok(())
}

/// Deletes managed indices of this table that the description no longer
/// declares, by editing `sqlite_master` directly.
///
/// The `writable_schema` toggle is not atomic with respect to other
/// connections; the script must run with exclusive access to the
/// database file. With no indexed column the `NOT IN` list is empty and
/// every managed index of the table is dropped.
pub fn write_orphan_cleanup<W: Write>(out: &mut W, def: &ViewDef) -> fmt::Result {
    let keep = index_names(def)
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(INDEX_LIST_SEPARATOR);

    writeln!(out, "-- Delete all indices that were previously defined by us, but are not included")?;
    writeln!(out, "-- in the lasted definition.")?;
    writeln!(out, "PRAGMA writable_schema = 1;")?;
    writeln!(out, "DELETE FROM sqlite_master")?;
    writeln!(out, "  WHERE type = 'index' AND tbl_name = '{}' AND", table_name(def))?;
    writeln!(out, "  (name LIKE '{}_%' AND name NOT IN ({}));", INDEX_PREFIX, keep)?;
    writeln!(out, "PRAGMA writable_schema = 0;")
}
