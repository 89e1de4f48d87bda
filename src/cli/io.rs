//! Input and output handling for the CLI
//!
//! - Input: one JSON view description from a file or stdin
//! - Output: the script plus a trailing newline, to stdout or a file
//! - UTF-8 only

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::errors::CliResult;
use crate::schema::{SchemaLoader, ViewDef};

/// Read a view description from `input`, or stdin when absent or `-`
pub fn read_view_def(input: Option<&Path>) -> CliResult<ViewDef> {
    let def = match input {
        Some(path) if path != Path::new("-") => SchemaLoader::from_path(path)?,
        _ => SchemaLoader::from_reader(io::stdin().lock())?,
    };
    Ok(def)
}

/// Write text followed by a newline to `output`, or stdout when absent
pub fn write_output(output: Option<&Path>, text: &str) -> CliResult<()> {
    match output {
        Some(path) => fs::write(path, format!("{}\n", text))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
