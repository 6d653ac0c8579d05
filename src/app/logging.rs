use std::io;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to warnings only.
/// Diagnostics go to standard output alongside the CLI's own messages.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stdout)
        .try_init();
}
