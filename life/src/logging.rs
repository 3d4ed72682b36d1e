//! Diagnostic tracing for the simulator.
//!
//! Tracing goes to stderr so stdout carries only the Life 1.06 output and can
//! be piped. `RUST_LOG` takes precedence over the built-in directives.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default directives: warnings everywhere.
pub const QUIET: &str = "warn";
/// Directives for `--verbose`: per-generation stats from this crate.
pub const VERBOSE: &str = "warn,life=debug";

/// Directives used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose { VERBOSE } else { QUIET }
}

/// Initialize tracing subscriber.
///
/// Output: stderr, compact format, no timestamps.
///
/// # Example
/// ```bash
/// RUST_LOG=life::simulate=debug life run --input glider.lif
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}
