//! Log setup.
//!
//! Diagnostics go through `tracing` to stderr so they never mix with the
//! report on stdout. `RUST_LOG` overrides the verbosity chosen on the command
//! line.

use tracing_subscriber::EnvFilter;

/// Map a verbosity count (`-v` flags) to a filter directive.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
