use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence when it is set; otherwise `level` is used as the
/// filter directive (e.g. `info` or `validator_api_rpc=debug,info`).
pub fn setup_logging(level: &str) -> Result<()> {
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(level))
		.map_err(|e| eyre::eyre!("Invalid log filter '{}': {}", level, e))?;

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_target(true))
		.try_init()
		.map_err(|e| eyre::eyre!("Failed to install tracing subscriber: {}", e))?;

	Ok(())
}
