//! Diagnostic tracing for debugging conversions.
//!
//! Reads `RUST_LOG`; defaults to `warn`, or `debug` with `--verbose`.
//! Output goes to stderr so it never mixes with generated previews.
//!
//! ```bash
//! RUST_LOG=bazelify_convert=debug bazelify bake --dry-run
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
