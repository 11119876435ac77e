//! Logging initialisation

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber
///
/// Levels come from `RUST_LOG` (e.g. `listing=debug`), falling back to
/// [`DEFAULT_FILTER`]. Fails if a global subscriber is already set.
pub fn try_init() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;
    Ok(())
}

/// Install the global tracing subscriber, ignoring an already-installed one
pub fn init() {
    if let Err(err) = try_init() {
        tracing::debug!(error = %err, "Tracing subscriber already installed");
    }
}
