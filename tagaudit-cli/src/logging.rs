//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Progress goes to stderr so piped reports stay clean on stdout. `RUST_LOG`
/// overrides the default level; `--quiet` raises the default to `warn`.
pub fn init(quiet: bool) {
    let default_filter = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}
