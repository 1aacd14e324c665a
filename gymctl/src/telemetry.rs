//! Telemetry initialization: structured logging via `tracing`.
//!
//! Log verbosity is controlled with the standard `RUST_LOG` environment
//! variable (e.g. `RUST_LOG=gymctl=debug,sqlx=warn`); without it, `info` and
//! above are printed.

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with console output.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");
    Ok(())
}
