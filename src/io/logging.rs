//! Logger initialization for the binary

use env_logger::Env;

/// Default log filter when `RUST_LOG` is unset
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Install the global logger; `RUST_LOG` overrides the default filter
///
/// Calling this more than once keeps the first logger.
pub fn init_logging(quiet: bool) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(quiet)))
        .format_timestamp_millis()
        .try_init();
}
