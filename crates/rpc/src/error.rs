use thiserror::Error;

use crate::constants::UNKNOWN_BLOCK_MESSAGE;

#[derive(Debug, Error)]
pub enum RpcError {
	/// The configured endpoint is empty, relative, or not http(s).
	#[error("invalid RPC endpoint: {0}")]
	InvalidEndpoint(String),

	#[error("failed to encode {method} request: {source}")]
	Encode {
		method: &'static str,
		#[source]
		source: serde_json::Error,
	},

	#[error("{method} request failed: {report:#}")]
	Transport { method: &'static str, report: eyre::Report },

	#[error("{method} returned HTTP {status}: {body}")]
	Status { method: &'static str, status: u16, body: String },

	#[error("failed to decode {method} response: {source}")]
	Decode {
		method: &'static str,
		#[source]
		source: serde_json::Error,
	},

	/// The node answered with a JSON-RPC `error` object.
	#[error("{method} returned RPC error {code}: {message}")]
	Rpc { method: &'static str, code: i64, message: String },

	#[error("{method} still rate limited after {attempts} attempts")]
	RateLimited { method: &'static str, attempts: u32 },
}

impl RpcError {
	/// Failures of the connection itself rather than of the data it carried.
	///
	/// Transport failures abort a resolution; data failures (an RPC error object
	/// or an unexpected payload shape) let fallback chains move on.
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Encode { .. } | Self::Transport { .. } | Self::Status { .. } | Self::RateLimited { .. })
	}

	pub fn is_unknown_block(&self) -> bool {
		match self {
			Self::Rpc { message, .. } => message.to_lowercase().contains(UNKNOWN_BLOCK_MESSAGE),
			_ => false,
		}
	}
}
