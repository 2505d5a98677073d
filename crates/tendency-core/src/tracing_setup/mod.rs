//! Tracing setup: structured logging to stderr and event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV_VAR;

/// Filter directive for a `-v` count: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter: `TENDENCY_LOG` wins when set and no `-v` was given.
fn filter_for(verbose: u8) -> EnvFilter {
    if verbose == 0 {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::new(level_for_verbosity(verbose))
    }
}

/// Initialize human-readable logging on stderr.
///
/// Stdout stays reserved for the agreement report. Safe to call more than
/// once; later calls are ignored.
pub fn init_tracing(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize JSON-lines logging on stderr.
pub fn init_tracing_json(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .json()
        .try_init();
}
