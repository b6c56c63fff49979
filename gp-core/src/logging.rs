//! Process-wide `tracing` setup for binaries built on this crate.
use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber filtered by `env_filter` (e.g. `"info"` or
/// `"gp_core=debug,warn"`).
///
/// Does nothing if a global subscriber is already set, so tests and embedding binaries may call it
/// freely.
pub fn setup(env_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .compact()
        .try_init();
}
