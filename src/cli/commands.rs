//! CLI command implementation
//!
//! Load configuration, read the description, apply switch overrides,
//! compile, write. Every step either succeeds or aborts the run.

use super::args::Cli;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_view_def, write_output};
use crate::compiler::{compile, index_names};
use crate::observability::{log_event, Event, Logger, Severity};
use crate::schema::{validate, ViewDef};

/// Main CLI entry point
///
/// Parses arguments and runs the compilation.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    run_with(Cli::parse_args())
}

/// Run a compilation for already-parsed arguments
pub fn run_with(cli: Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            let shown = path.display().to_string();
            log_event(Event::ConfigLoaded, &[("path", shown.as_str())]);
            config
        }
        None => Config::default(),
    };

    let severity = match &cli.log_level {
        Some(level) => level.parse::<Severity>().map_err(CliError::config_error)?,
        None => config.severity()?,
    };
    Logger::set_min_severity(severity);

    let mut def = read_view_def(cli.input.as_deref())?;
    let columns = def.columns.len().to_string();
    log_event(
        Event::SchemaLoaded,
        &[("columns", columns.as_str()), ("view", def.name.as_str())],
    );

    apply_overrides(&mut def, &cli, &config)?;

    if cli.list_indices {
        validate(&def)?;
        return write_output(cli.output.as_deref(), &index_names(&def).join("\n"));
    }

    let script = compile_view(&def)?;
    write_output(cli.output.as_deref(), &script)?;

    let destination = cli
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdout>".to_string());
    log_event(Event::OutputWritten, &[("destination", destination.as_str())]);

    Ok(())
}

/// OR the command-line and configuration switches into the description.
///
/// Refuses orphan cleanup when the configuration forbids it.
pub fn apply_overrides(def: &mut ViewDef, cli: &Cli, config: &Config) -> CliResult<()> {
    def.skip_triggers |= cli.skip_triggers || config.skip_triggers;
    def.skip_indices |= cli.skip_indices || config.skip_indices;
    def.unsafe_drop_orphan_indices |= cli.unsafe_drop_orphan_indices;

    if def.unsafe_drop_orphan_indices
        && !def.skip_indices
        && !config.allow_unsafe_drop_orphan_indices
    {
        return Err(CliError::config_error(format!(
            "View '{}' requests unsafe_drop_orphan_indices, which the configuration forbids",
            def.name
        )));
    }

    Ok(())
}

/// Compile a description, logging the lifecycle around it
pub fn compile_view(def: &ViewDef) -> CliResult<String> {
    let view = def.name.as_str();
    log_event(Event::CompileBegin, &[("view", view)]);

    let script = compile(def).map_err(|e| {
        let message = e.to_string();
        log_event(
            Event::CompileFailed,
            &[("code", e.code()), ("message", message.as_str()), ("view", view)],
        );
        CliError::from(e)
    })?;

    if def.unsafe_drop_orphan_indices && !def.skip_indices {
        let kept = index_names(def).len().to_string();
        log_event(
            Event::OrphanCleanupEmitted,
            &[
                ("kept", kept.as_str()),
                ("requires", "exclusive database access"),
                ("view", view),
            ],
        );
    }

    let bytes = script.len().to_string();
    log_event(Event::CompileComplete, &[("bytes", bytes.as_str()), ("view", view)]);

    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnDef;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["recordlite"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_overrides_are_or_ed() {
        let mut def = ViewDef::new("events").skip_indices(true);
        apply_overrides(&mut def, &cli(&["--skip-triggers"]), &Config::default()).unwrap();

        assert!(def.skip_triggers);
        assert!(def.skip_indices);
        assert!(!def.unsafe_drop_orphan_indices);
    }

    #[test]
    fn test_config_switches_apply() {
        let mut def = ViewDef::new("events");
        let config = Config {
            skip_indices: true,
            ..Config::default()
        };
        apply_overrides(&mut def, &cli(&[]), &config).unwrap();
        assert!(def.skip_indices);
    }

    #[test]
    fn test_config_forbids_unsafe_drop() {
        let config = Config {
            allow_unsafe_drop_orphan_indices: false,
            ..Config::default()
        };

        let mut def = ViewDef::new("events").unsafe_drop_orphan_indices(true);
        let err = apply_overrides(&mut def, &cli(&[]), &config).unwrap_err();
        assert!(err.message().contains("events"));

        // Skipped indices never emit the cleanup, so nothing to refuse
        let mut def = ViewDef::new("events")
            .unsafe_drop_orphan_indices(true)
            .skip_indices(true);
        assert!(apply_overrides(&mut def, &cli(&[]), &config).is_ok());
    }

    #[test]
    fn test_compile_view_maps_schema_errors() {
        let def = ViewDef::new("events")
            .with_column(ColumnDef::new("a", "1"))
            .with_column(ColumnDef::new("a", "2"));
        let err = compile_view(&def).unwrap_err();
        assert_eq!(err.code_str(), "RECORDLITE_CLI_SCHEMA_ERROR");
    }
}
