//! Tracing subscriber setup.
//!
//! Called once from the binary at startup. `RUST_LOG` takes priority over
//! the configured level so operators can raise verbosity without touching
//! settings.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `level` is a tracing filter directive (e.g. `info`,
/// `pulse_server=debug`). With `json` set, log lines are emitted as
/// structured JSON instead of human-readable text. A second call is a
/// no-op (the subscriber can only be installed once per process).
pub fn init(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    // Already-set subscriber (tests, repeated init) is not an error.
    let _ = result;
}
