use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use eyre::{Result, WrapErr};
use rpc::RpcConfig;
use rpc::constants::{
	DEFAULT_MAX_RATE_LIMIT_RETRIES, DEFAULT_RATE_LIMIT_BACKOFF_MS, DEFAULT_REQUEST_DELAY_MS,
	DEFAULT_REQUEST_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding file settings, e.g. `VALIDATOR_API_PORT`
pub const ENV_PREFIX: &str = "VALIDATOR_API";

/// Upstream URL variable honoured last, after every other source
pub const ETH_RPC_ENV: &str = "ETH_RPC";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
	/// Interface the HTTP server binds to
	pub host: String,

	pub port: u16,

	/// Upstream JSON-RPC endpoint
	pub rpc_url: String,

	pub request_timeout_secs: u64,

	/// Pause before every upstream call
	pub request_delay_ms: u64,

	/// First wait after a rate-limited response; doubles per retry
	pub rate_limit_backoff_ms: u64,

	pub max_rate_limit_retries: u32,

	/// Unix time of slot 0
	pub genesis_time: u64,

	/// Default tracing filter when `RUST_LOG` is unset
	pub log_level: String,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
			rpc_url: String::new(),
			request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
			request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
			rate_limit_backoff_ms: DEFAULT_RATE_LIMIT_BACKOFF_MS,
			max_rate_limit_retries: DEFAULT_MAX_RATE_LIMIT_RETRIES,
			genesis_time: 0,
			log_level: "info".to_string(),
		}
	}
}

impl ApiConfig {
	/// Load from defaults, the optional TOML file at `path`, `VALIDATOR_API_*`
	/// variables and `ETH_RPC`, later sources winning.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		Self::from_sources(path, Environment::with_prefix(ENV_PREFIX), std::env::var(ETH_RPC_ENV).ok())
	}

	pub fn from_sources(path: Option<&Path>, env: Environment, eth_rpc: Option<String>) -> Result<Self> {
		let mut builder = Config::builder();

		if let Some(path) = path {
			builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
		}
		builder = builder.add_source(env.try_parsing(true));

		if let Some(url) = eth_rpc.filter(|url| !url.trim().is_empty()) {
			builder = builder.set_override("rpc_url", url)?;
		}

		builder
			.build()
			.and_then(|config| config.try_deserialize())
			.wrap_err("failed to load validator API configuration")
	}

	/// `host:port` for the listener
	pub fn listen_addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}

	pub fn rpc_config(&self) -> RpcConfig {
		RpcConfig {
			endpoint: self.rpc_url.clone(),
			request_timeout_secs: self.request_timeout_secs,
			request_delay_ms: self.request_delay_ms,
			rate_limit_backoff_ms: self.rate_limit_backoff_ms,
			max_rate_limit_retries: self.max_rate_limit_retries,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use config::Map;
	use tempfile::NamedTempFile;

	use super::*;

	fn env(vars: &[(&str, &str)]) -> Environment {
		let vars: Map<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		Environment::with_prefix(ENV_PREFIX).source(Some(vars))
	}

	fn toml_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn test_defaults() {
		let config = ApiConfig::from_sources(None, env(&[]), None).unwrap();
		assert_eq!(config, ApiConfig::default());
		assert_eq!(config.listen_addr(), "0.0.0.0:8080");
		assert_eq!(config.request_delay_ms, 1_000);
		assert_eq!(config.max_rate_limit_retries, 5);
	}

	#[test]
	fn test_file_then_env_then_eth_rpc() {
		let file = toml_file(
			r#"
			port = 9000
			rpc_url = "http://file:8545"
			genesis_time = 1606824023
			"#,
		);

		let config = ApiConfig::from_sources(Some(file.path()), env(&[]), None).unwrap();
		assert_eq!(config.port, 9000);
		assert_eq!(config.rpc_url, "http://file:8545");
		assert_eq!(config.genesis_time, 1_606_824_023);
		assert_eq!(config.host, "0.0.0.0");

		let config = ApiConfig::from_sources(
			Some(file.path()),
			env(&[("VALIDATOR_API_PORT", "9100"), ("VALIDATOR_API_RPC_URL", "http://env:8545")]),
			None,
		)
		.unwrap();
		assert_eq!(config.port, 9100);
		assert_eq!(config.rpc_url, "http://env:8545");

		let config = ApiConfig::from_sources(
			Some(file.path()),
			env(&[("VALIDATOR_API_RPC_URL", "http://env:8545")]),
			Some("https://eth-rpc.example".to_string()),
		)
		.unwrap();
		assert_eq!(config.rpc_url, "https://eth-rpc.example");
	}

	#[test]
	fn test_blank_eth_rpc_is_ignored() {
		let config =
			ApiConfig::from_sources(None, env(&[("VALIDATOR_API_RPC_URL", "http://env:8545")]), Some("  ".into()))
				.unwrap();
		assert_eq!(config.rpc_url, "http://env:8545");
	}

	#[test]
	fn test_missing_file_fails() {
		let err = ApiConfig::from_sources(Some(Path::new("/nonexistent/validator-api.toml")), env(&[]), None);
		assert!(err.is_err());
	}

	#[test]
	fn test_rpc_config() {
		let config = ApiConfig { rpc_url: "http://localhost:8545".into(), rate_limit_backoff_ms: 500, ..Default::default() };
		let rpc = config.rpc_config();
		assert_eq!(rpc.endpoint, "http://localhost:8545");
		assert_eq!(rpc.rate_limit_backoff_ms, 500);
		assert_eq!(rpc.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
	}
}
