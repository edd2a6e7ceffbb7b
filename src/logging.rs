//! Logger bootstrap.
//!
//! The app logs through the `log` facade; `env_logger` writes to stderr,
//! which ends up in Console.app when launched from the bundle.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialise the global logger. Safe to call more than once.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
