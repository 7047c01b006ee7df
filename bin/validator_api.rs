use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use rpc::JsonRpcClient;
use server::{ApiConfig, run_server};
use service::SlotService;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "validator-api", about = "Block reward and sync committee duty lookups per slot")]
struct Args {
	/// Path to a TOML config file
	#[arg(long, env = "CONFIG_PATH")]
	config: Option<PathBuf>,

	/// Tracing filter, overrides `log_level` from the config
	#[arg(long, env = "RUST_LOG")]
	log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	// Load config before logging so the configured level can apply
	let config = ApiConfig::load(args.config.as_deref())?;

	// Setup logging
	common::logging::setup_logging(args.log_level.as_deref().unwrap_or(&config.log_level))?;
	info!(listen_addr = %config.listen_addr(), genesis_time = config.genesis_time, "Loaded validator API config");

	let rpc = JsonRpcClient::with_default_transport(config.rpc_config()).wrap_err("invalid upstream RPC configuration")?;
	let service = SlotService::new(rpc).with_genesis_time(config.genesis_time);

	let shutdown = async {
		if let Err(e) = common::utils::wait_for_signal().await {
			error!("Failed to listen for shutdown signals: {}", e);
			std::future::pending::<()>().await;
		}
		info!("Shutdown signal received, stopping server");
	};

	run_server(service, config.listen_addr(), shutdown).await
}
