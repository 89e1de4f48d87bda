//! recordlite CLI entry point
//!
//! Delegates everything to `cli::run`; on failure logs a FATAL event to
//! stderr and exits non-zero.

use recordlite::cli;
use recordlite::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal("RECORDLITE_FATAL", &[("code", e.code_str()), ("message", e.message())]);
        std::process::exit(1);
    }
}
