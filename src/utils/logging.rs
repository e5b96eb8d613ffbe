//! Tracing subscriber setup for binaries and host applications
//!
//! The library itself only emits events; nothing installs a subscriber
//! implicitly. Binaries call `init()` once at startup.

use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info` when the environment sets no filter. Safe to call
/// once per process; a second call is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .compact()
        .try_init()
        .ok();
}
