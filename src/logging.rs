//! Process-wide `tracing` subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact fmt subscriber filtered by `RUST_LOG`
/// (default `portfolio=info`).
///
/// Call once, from `main`. A second call is a no-op with a warning on stderr,
/// which keeps tests that build their own subscriber safe.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio=info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init();

    if let Err(e) = installed {
        eprintln!("logging already initialised: {e}");
    }
}
