//! Script assembly
//!
//! Composes the statement groups in their fixed order:
//! transaction open, raw table, view, triggers, indices, commit.

use std::fmt::Write;

use super::errors::CompileResult;
use super::statements::{write_indices, write_table, write_triggers, write_view};
use crate::schema::{validate, ViewDef};

/// Compiles a view description into a single SQL script.
///
/// Pure and deterministic: the same description always yields the same
/// bytes. The description is validated first; on any error nothing is
/// returned.
pub fn compile(def: &ViewDef) -> CompileResult<String> {
    validate(def)?;

    let mut script = String::with_capacity(1024);
    write_script(&mut script, def)?;

    Ok(script.trim_matches('\n').to_string())
}

pub(crate) fn write_script<W: Write>(out: &mut W, def: &ViewDef) -> CompileResult<()> {
    write!(out, "BEGIN EXCLUSIVE;\n\n")?;

    write_table(out, def)?;
    write!(out, "\n\n")?;

    write_banner(out, "View")?;
    write_view(out, def)?;
    write!(out, "\n\n")?;

    if !def.skip_triggers {
        write_banner(out, "Triggers")?;
        writeln!(out, "-- The trigger helpers enable applications to write in the view and avoid")?;
        writeln!(
            out,
            "-- the writing in the raw table. The restriction is that they can only reference"
        )?;
        writeln!(out, "-- the 'raw' column.")?;
        writeln!(out)?;
        write_triggers(out, def)?;
        write!(out, "\n\n")?;
    }

    if !def.skip_indices {
        write_banner(out, "Indices")?;
        write_indices(out, def)?;
        writeln!(out)?;
    }

    write!(out, "COMMIT;")?;
    Ok(())
}

fn write_banner<W: Write>(out: &mut W, title: &str) -> std::fmt::Result {
    write!(out, "--\n-- {}\n--\n\n", title)
}
