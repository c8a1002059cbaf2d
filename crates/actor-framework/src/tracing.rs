//! Tracing setup shared by binaries built on the framework.

use tracing_subscriber::EnvFilter;

/// Installs a compact fmt subscriber.
///
/// The filter comes from `RUST_LOG`; when unset, `default_directive` applies
/// (e.g. `"info"` or `"parcel_service=debug,actor_framework=info"`).
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
