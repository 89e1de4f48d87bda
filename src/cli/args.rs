//! CLI argument definitions using clap
//!
//! recordlite [INPUT] [--output <path>] [--config <path>] [switches]

use clap::Parser;
use std::path::PathBuf;

/// recordlite - compile view descriptions into schema-on-read SQLite DDL
#[derive(Parser, Debug)]
#[command(name = "recordlite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// View description (JSON). Reads standard input when absent or "-"
    pub input: Option<PathBuf>,

    /// Write the script to this file instead of standard output
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not generate the INSTEAD OF triggers
    #[arg(long)]
    pub skip_triggers: bool,

    /// Do not generate index statements
    #[arg(long)]
    pub skip_indices: bool,

    /// Drop managed indices that are no longer declared
    #[arg(long)]
    pub unsafe_drop_orphan_indices: bool,

    /// Print the managed index names instead of the script
    #[arg(long)]
    pub list_indices: bool,

    /// Minimum log severity (trace, info, warn, error, fatal)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["recordlite"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.skip_triggers);
        assert!(!cli.unsafe_drop_orphan_indices);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "recordlite",
            "view.json",
            "-o",
            "out.sql",
            "--skip-indices",
            "--log-level",
            "warn",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("view.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.sql")));
        assert!(cli.skip_indices);
        assert_eq!(cli.log_level.as_deref(), Some("warn"));
    }
}
