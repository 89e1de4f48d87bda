//! Lifecycle events of a compilation run
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events of the command-line run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// View description decoded
    SchemaLoaded,
    /// Compilation starts
    CompileBegin,
    /// Script produced
    CompileComplete,
    /// Description rejected or script assembly failed
    CompileFailed,
    /// Script contains the `sqlite_master` orphan cleanup
    OrphanCleanupEmitted,
    /// Script written to its destination
    OutputWritten,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::CompileBegin => "COMPILE_BEGIN",
            Event::CompileComplete => "COMPILE_COMPLETE",
            Event::CompileFailed => "COMPILE_FAILED",
            Event::OrphanCleanupEmitted => "ORPHAN_CLEANUP_EMITTED",
            Event::OutputWritten => "OUTPUT_WRITTEN",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::CompileFailed => Severity::Error,
            Event::OrphanCleanupEmitted => Severity::Warn,
            Event::ConfigLoaded | Event::SchemaLoaded => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::SchemaLoaded,
            Event::CompileBegin,
            Event::CompileComplete,
            Event::CompileFailed,
            Event::OrphanCleanupEmitted,
            Event::OutputWritten,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::CompileFailed.severity(), Severity::Error);
        assert_eq!(Event::OrphanCleanupEmitted.severity(), Severity::Warn);
        assert_eq!(Event::CompileComplete.severity(), Severity::Info);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::CompileBegin), "COMPILE_BEGIN");
    }
}
