//! Logging setup for the CLI
//!
//! Logs go to stderr; stdout is reserved for JSON output.

use std::io;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from an explicit directive, else `RUST_LOG`, else
/// [`DEFAULT_FILTER`]. Unparseable directives fall back to the default.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
