//! Logging setup for the simulator binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at `warn`, or `debug` when `verbose` is set.
///
/// RUST_LOG still takes precedence over either level.
pub fn init(verbose: bool) {
    init_with_level(if verbose { "debug" } else { "warn" })
}

/// Install the global subscriber, writing compact lines to stderr so the
/// BAC report on stdout stays clean.
///
/// `level` is only used when RUST_LOG is unset or unparsable.
pub fn init_with_level(level: &str) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(level),
    };
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
