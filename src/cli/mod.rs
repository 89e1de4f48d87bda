//! CLI module for recordlite
//!
//! Reads a view description from a file or stdin, compiles it and
//! prints the script. Configuration comes from flags and an optional
//! JSON config file.

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::Cli;
pub use commands::{apply_overrides, compile_view, run, run_with};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_view_def, write_output};
