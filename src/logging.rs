//! Opt-in tracing setup for binaries and tests.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! the consumer's call.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a fmt subscriber with env-filter support.
///
/// Honors `RUST_LOG`; defaults to debug output for this crate. Safe to call
/// more than once - later calls are no-ops if a global subscriber is already
/// installed.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyshare_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
