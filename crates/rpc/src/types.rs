use std::time::Duration;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::constants::{
	DEFAULT_MAX_RATE_LIMIT_RETRIES, DEFAULT_RATE_LIMIT_BACKOFF_MS, DEFAULT_REQUEST_DELAY_MS,
	DEFAULT_REQUEST_TIMEOUT_SECS, JSONRPC_VERSION, MAX_RATE_LIMIT_BACKOFF_MS,
};

/// Configuration for the upstream JSON-RPC endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
	/// Absolute http(s) URL of the provider
	pub endpoint: String,
	/// Per-request timeout in seconds
	pub request_timeout_secs: u64,
	/// Fixed delay before every outbound call
	pub request_delay_ms: u64,
	/// First wait after a rate-limited response
	pub rate_limit_backoff_ms: u64,
	/// How many times one call is re-issued while rate limited
	pub max_rate_limit_retries: u32,
}

impl RpcConfig {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
			request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
			rate_limit_backoff_ms: DEFAULT_RATE_LIMIT_BACKOFF_MS,
			max_rate_limit_retries: DEFAULT_MAX_RATE_LIMIT_RETRIES,
		}
	}

	pub fn request_delay(&self) -> Duration {
		Duration::from_millis(self.request_delay_ms)
	}

	/// Wait before re-issuing a call after its `attempt`-th rate-limited response (1-based).
	pub fn rate_limit_backoff(&self, attempt: u32) -> Duration {
		let factor = 1u64 << attempt.saturating_sub(1).min(16);
		Duration::from_millis(self.rate_limit_backoff_ms.saturating_mul(factor).min(MAX_RATE_LIMIT_BACKOFF_MS))
	}
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a, P> {
	pub jsonrpc: &'static str,
	pub method: &'a str,
	pub params: P,
	pub id: u64,
}

impl<'a, P> RpcRequest<'a, P> {
	pub fn new(id: u64, method: &'a str, params: P) -> Self {
		Self { jsonrpc: JSONRPC_VERSION, method, params, id }
	}
}

/// JSON-RPC 2.0 response envelope; a `null` or missing result decodes as `None`
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<R> {
	pub result: Option<R>,
	pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
	#[serde(default)]
	pub code: i64,
	#[serde(default)]
	pub message: String,
}

/// Execution block as returned by `eth_getBlockByNumber` / `eth_getBlockByHash`.
///
/// Quantities are kept as the provider's hex strings and parsed on use so one
/// malformed transaction does not make the whole block unreadable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionBlock {
	#[serde(default)]
	pub hash: Option<String>,
	#[serde(default)]
	pub number: Option<String>,
	/// Fee recipient
	#[serde(default)]
	pub miner: Option<String>,
	#[serde(default)]
	pub extra_data: Option<String>,
	#[serde(default)]
	pub base_fee_per_gas: Option<String>,
	#[serde(default)]
	pub transactions: Vec<BlockTransaction>,
}

impl ExecutionBlock {
	/// Block hash, unless the provider left it out or empty
	pub fn block_hash(&self) -> Option<&str> {
		self.hash.as_deref().filter(|hash| !hash.is_empty())
	}

	pub fn extra_data(&self) -> &str {
		self.extra_data.as_deref().unwrap_or_default()
	}

	pub fn base_fee(&self) -> Option<U256> {
		self.base_fee_per_gas.as_deref().and_then(parse_quantity)
	}
}

/// Blocks are requested with either hashes only or full transaction objects
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlockTransaction {
	Hash(String),
	Full(RpcTransaction),
}

impl BlockTransaction {
	pub fn as_full(&self) -> Option<&RpcTransaction> {
		match self {
			Self::Full(tx) => Some(tx),
			Self::Hash(_) => None,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
	#[serde(default)]
	pub hash: Option<String>,
	#[serde(default)]
	pub gas_price: Option<String>,
	#[serde(default)]
	pub max_priority_fee_per_gas: Option<String>,
	/// Gas limit
	#[serde(default)]
	pub gas: Option<String>,
	/// Only present when the provider inlines receipt data
	#[serde(default)]
	pub gas_used: Option<String>,
}

/// `beacon_get_state_sync_committees` result
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncCommitteeResult {
	#[serde(default)]
	pub data: SyncCommitteeData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncCommitteeData {
	#[serde(default)]
	pub validators: Vec<String>,
}

/// `beacon_get_validators` result
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidatorsResult {
	#[serde(default)]
	pub data: Vec<ValidatorEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidatorEntry {
	pub validator: ValidatorDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidatorDetails {
	pub pubkey: String,
}

/// Parse a hex quantity, with or without the `0x` prefix
pub fn parse_quantity(value: &str) -> Option<U256> {
	let digits = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")).unwrap_or(value);
	if digits.is_empty() {
		return None;
	}
	U256::from_str_radix(digits, 16).ok()
}

/// Hex quantity encoding used for slot, epoch and period parameters
pub fn to_quantity(value: u64) -> String {
	format!("0x{value:x}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_quantity() {
		assert_eq!(parse_quantity("0x5208"), Some(U256::from(21_000)));
		assert_eq!(parse_quantity("5208"), Some(U256::from(21_000)));
		assert_eq!(parse_quantity("0x0"), Some(U256::ZERO));
		assert_eq!(parse_quantity("0x"), None);
		assert_eq!(parse_quantity(""), None);
		assert_eq!(parse_quantity("0xnope"), None);
	}

	#[test]
	fn test_parse_quantity_beyond_u64() {
		let parsed = parse_quantity("0x100000000000000000000").unwrap();
		assert_eq!(parsed, U256::from(1u128 << 80));
	}

	#[test]
	fn test_to_quantity() {
		assert_eq!(to_quantity(0), "0x0");
		assert_eq!(to_quantity(4_700_000), "0x47b760");
	}

	#[test]
	fn test_rate_limit_backoff_doubles_and_caps() {
		let config = RpcConfig::new("http://localhost:8545");
		assert_eq!(config.rate_limit_backoff(1), Duration::from_millis(2_000));
		assert_eq!(config.rate_limit_backoff(2), Duration::from_millis(4_000));
		assert_eq!(config.rate_limit_backoff(3), Duration::from_millis(8_000));
		assert_eq!(config.rate_limit_backoff(10), Duration::from_millis(MAX_RATE_LIMIT_BACKOFF_MS));
	}

	#[test]
	fn test_request_serializes_as_jsonrpc() {
		let request = RpcRequest::new(7, "eth_getBlockByNumber", ("0x47b760", true));
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(
			value,
			serde_json::json!({
				"jsonrpc": "2.0",
				"method": "eth_getBlockByNumber",
				"params": ["0x47b760", true],
				"id": 7
			})
		);
	}

	#[test]
	fn test_execution_block_with_hashes_and_objects() {
		let block: ExecutionBlock = serde_json::from_value(serde_json::json!({
			"hash": "0xabc",
			"miner": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
			"extraData": "0x6265617665726275696c642e6f7267",
			"baseFeePerGas": "0x5",
			"transactions": [
				"0x01",
				{ "hash": "0x02", "gasPrice": "0x8", "gas": "0x5208" }
			]
		}))
		.unwrap();

		assert_eq!(block.block_hash(), Some("0xabc"));
		assert_eq!(block.base_fee(), Some(U256::from(5)));
		assert_eq!(block.transactions.len(), 2);
		assert!(block.transactions[0].as_full().is_none());
		let tx = block.transactions[1].as_full().unwrap();
		assert_eq!(tx.gas_price.as_deref(), Some("0x8"));
		assert_eq!(tx.gas.as_deref(), Some("0x5208"));
	}

	#[test]
	fn test_execution_block_tolerates_missing_fields() {
		let block: ExecutionBlock = serde_json::from_value(serde_json::json!({ "hash": "" })).unwrap();
		assert_eq!(block.block_hash(), None);
		assert_eq!(block.extra_data(), "");
		assert_eq!(block.base_fee(), None);
		assert!(block.transactions.is_empty());
	}

	#[test]
	fn test_response_envelope() {
		let ok: RpcResponse<SyncCommitteeResult> = serde_json::from_str(
			r#"{"jsonrpc":"2.0","id":3,"result":{"data":{"validators":["0x01","0x02"]}}}"#,
		)
		.unwrap();
		assert_eq!(ok.result.unwrap().data.validators, vec!["0x01", "0x02"]);
		assert!(ok.error.is_none());

		let null: RpcResponse<ExecutionBlock> = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();
		assert!(null.result.is_none());

		let err: RpcResponse<ExecutionBlock> =
			serde_json::from_str(r#"{"error":{"code":-32000,"message":"Unknown block"}}"#).unwrap();
		assert!(err.result.is_none());
		assert_eq!(err.error.unwrap().message, "Unknown block");
	}

	#[test]
	fn test_response_envelope_without_result_field() {
		// ValidatorEntry has no Default impl
		let empty: RpcResponse<ValidatorEntry> = serde_json::from_str(r#"{"jsonrpc":"2.0","id":4}"#).unwrap();
		assert!(empty.result.is_none());
		assert!(empty.error.is_none());

		let status: RpcResponse<serde_json::Value> =
			serde_json::from_str(r#"{"jsonrpc":"2.0","id":5,"result":false}"#).unwrap();
		assert_eq!(status.result, Some(serde_json::Value::Bool(false)));
	}
}
