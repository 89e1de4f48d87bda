//! Observability for the command-line layer
//!
//! Provides structured JSON logging and typed lifecycle events. The
//! compiler itself never logs; only the CLI reports what happened.
//!
//! # Usage
//!
//! ```ignore
//! use recordlite::observability::{log_event, Event, Logger};
//!
//! log_event(Event::CompileBegin, &[("view", "events")]);
//! Logger::warn("SOMETHING_ODD", &[("detail", "...")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
