//! Logging setup.
//!
//! Installs a `tracing` subscriber writing to stderr, so stdout stays
//! free for the release report. `RUST_LOG` overrides the default filter.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging system for the given verbosity flags.
pub fn init(verbose: bool, quiet: bool) -> Result<(), TryInitError> {
    init_with_filter(default_filter(verbose, quiet))
}

/// Initialize the logging system with a specific filter
///
/// # Arguments
///
/// * `filter` - The log filter string (e.g., "info", "debug", "devfarm_release=trace")
pub fn init_with_filter(filter: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    }
}
