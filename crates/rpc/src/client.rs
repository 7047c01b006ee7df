//! HTTP transport and JSON-RPC call loop for the upstream chain data provider

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use eyre::{Context, Result};
use reqwest::{Client, Url, header::CONTENT_TYPE};
use serde::{Serialize, de::DeserializeOwned};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::constants::{
	GET_BLOCK_BY_HASH, GET_BLOCK_BY_NUMBER, GET_STATE_SYNC_COMMITTEES, GET_VALIDATORS, RATE_LIMIT_MARKER, SYNCING,
};
use crate::error::RpcError;
use crate::metrics::client_http_metrics;
use crate::types::{ExecutionBlock, RpcConfig, RpcRequest, RpcResponse, SyncCommitteeResult, ValidatorsResult, to_quantity};

const HTTP_METHOD: &str = "POST";

/// HTTP response containing status code and body
#[derive(Debug, Clone)]
pub struct HttpResponse {
	pub status: u16,
	pub body: Vec<u8>,
}

impl HttpResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Providers signal throttling either with a 429 or with a marker in an otherwise normal body
	pub fn is_rate_limited(&self) -> bool {
		self.status == 429 || String::from_utf8_lossy(&self.body).contains(RATE_LIMIT_MARKER)
	}
}

/// Trait for posting JSON bodies (mockable for testing).
/// When the test-utils feature is enabled, mockall generates `MockRpcTransport`.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
	/// POST `body` as `application/json` to `url`
	async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpResponse>;
}

/// Production transport backed by a pooled reqwest client
pub struct ReqwestTransport {
	client: Client,
}

impl ReqwestTransport {
	/// Create a new transport whose requests time out after `timeout_secs`
	pub fn new(timeout_secs: u64) -> Result<Self> {
		if timeout_secs == 0 {
			eyre::bail!("Request timeout must be greater than zero");
		}

		let client = Client::builder()
			.timeout(Duration::from_secs(timeout_secs))
			.build()
			.context("Failed to create HTTP client")?;
		Ok(Self { client })
	}
}

#[async_trait]
impl RpcTransport for ReqwestTransport {
	async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<HttpResponse> {
		let response = self
			.client
			.post(url)
			.header(CONTENT_TYPE, "application/json")
			.body(body)
			.send()
			.await
			.with_context(|| format!("Failed to send request to {}", url))?;

		let status = response.status().as_u16();
		let body =
			response.bytes().await.with_context(|| format!("Failed to read response body from {}", url))?.to_vec();

		Ok(HttpResponse { status, body })
	}
}

/// Check that `raw` is an absolute http(s) URL
pub fn validate_endpoint(raw: &str) -> Result<Url, RpcError> {
	if raw.trim().is_empty() {
		return Err(RpcError::InvalidEndpoint("RPC URL cannot be empty".to_string()));
	}

	let url = Url::parse(raw).map_err(|e| RpcError::InvalidEndpoint(format!("invalid RPC URL '{raw}': {e}")))?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		scheme => Err(RpcError::InvalidEndpoint(format!("RPC URL must use http or https scheme, got '{scheme}'"))),
	}
}

/// JSON-RPC client for the upstream provider.
///
/// Every call waits `request_delay_ms` before it goes out and is re-issued with
/// a growing backoff while the provider reports rate limiting, up to
/// `max_rate_limit_retries` times. Calls are strictly sequential per caller;
/// the underlying connection pool is shared between clones.
pub struct JsonRpcClient<T: RpcTransport> {
	transport: Arc<T>,
	endpoint: Url,
	config: RpcConfig,
	next_id: Arc<AtomicU64>,
}

// Manual Debug implementation since T might not implement Debug
impl<T: RpcTransport> std::fmt::Debug for JsonRpcClient<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("JsonRpcClient").field("endpoint", &self.endpoint.as_str()).field("config", &self.config).finish()
	}
}

// Manual Clone implementation since T might not implement Clone
impl<T: RpcTransport> Clone for JsonRpcClient<T> {
	fn clone(&self) -> Self {
		Self {
			transport: Arc::clone(&self.transport),
			endpoint: self.endpoint.clone(),
			config: self.config.clone(),
			next_id: Arc::clone(&self.next_id),
		}
	}
}

impl<T: RpcTransport> JsonRpcClient<T> {
	/// Creates a client for `config.endpoint` using the given transport.
	///
	/// # Errors
	///
	/// Returns [`RpcError::InvalidEndpoint`] if the endpoint is empty, malformed,
	/// or not an http(s) URL.
	pub fn new(config: RpcConfig, transport: T) -> Result<Self, RpcError> {
		let endpoint = validate_endpoint(&config.endpoint)?;
		Ok(Self { transport: Arc::new(transport), endpoint, config, next_id: Arc::new(AtomicU64::new(1)) })
	}

	/// Issue one JSON-RPC call and decode its `result`.
	///
	/// Returns `Ok(None)` for a `null` result and [`RpcError::Rpc`] when the
	/// provider answers with an `error` object.
	pub async fn call<P, R>(&self, method: &'static str, params: P) -> Result<Option<R>, RpcError>
	where
		P: Serialize,
		R: DeserializeOwned,
	{
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		let body =
			serde_json::to_vec(&RpcRequest::new(id, method, params)).map_err(|source| RpcError::Encode { method, source })?;

		let metrics = client_http_metrics();
		let mut rate_limited: u32 = 0;

		loop {
			sleep(self.config.request_delay()).await;

			let start = metrics.start(method, HTTP_METHOD);
			let response = match self.transport.post_json(self.endpoint.as_str(), body.clone()).await {
				Ok(response) => response,
				Err(report) => {
					metrics.finish_label(method, HTTP_METHOD, "error", start);
					return Err(RpcError::Transport { method, report });
				}
			};

			if response.is_rate_limited() {
				metrics.finish_label(method, HTTP_METHOD, "rate_limited", start);
				rate_limited += 1;
				if rate_limited > self.config.max_rate_limit_retries {
					return Err(RpcError::RateLimited { method, attempts: rate_limited });
				}

				let backoff = self.config.rate_limit_backoff(rate_limited);
				warn!(
					method = method,
					attempt = rate_limited,
					backoff_ms = backoff.as_millis() as u64,
					"Upstream rate limited request, retrying"
				);
				sleep(backoff).await;
				continue;
			}

			metrics.finish_status(method, HTTP_METHOD, response.status, start);
			debug!(
				method = method,
				id = id,
				status = response.status,
				body = %String::from_utf8_lossy(&response.body),
				"Upstream response"
			);

			return decode_response(method, response);
		}
	}

	pub async fn get_block_by_number(&self, number: u64, full_transactions: bool) -> Result<Option<ExecutionBlock>, RpcError> {
		self.call(GET_BLOCK_BY_NUMBER, (to_quantity(number), full_transactions)).await
	}

	pub async fn get_block_by_hash(&self, hash: &str, full_transactions: bool) -> Result<Option<ExecutionBlock>, RpcError> {
		self.call(GET_BLOCK_BY_HASH, (hash, full_transactions)).await
	}

	/// `eth_syncing` answers `false` or a progress object, so the result is left untyped
	pub async fn syncing(&self) -> Result<Option<serde_json::Value>, RpcError> {
		self.call(SYNCING, Vec::<serde_json::Value>::new()).await
	}

	pub async fn get_state_sync_committees(
		&self,
		epoch: u64,
		sync_period: u64,
	) -> Result<Option<SyncCommitteeResult>, RpcError> {
		self.call(GET_STATE_SYNC_COMMITTEES, (to_quantity(epoch), to_quantity(sync_period))).await
	}

	pub async fn get_validators(&self, epoch: u64) -> Result<Option<ValidatorsResult>, RpcError> {
		self.call(GET_VALIDATORS, [to_quantity(epoch)]).await
	}
}

// Convenience constructor for production use with ReqwestTransport
impl JsonRpcClient<ReqwestTransport> {
	/// Creates a client with the default reqwest transport.
	///
	/// # Errors
	///
	/// Returns an error if the endpoint is invalid, the timeout is zero, or the
	/// underlying HTTP client cannot be constructed.
	pub fn with_default_transport(config: RpcConfig) -> Result<Self> {
		validate_endpoint(&config.endpoint)?;
		let transport = ReqwestTransport::new(config.request_timeout_secs)?;
		Ok(Self::new(config, transport)?)
	}
}

fn decode_response<R: DeserializeOwned>(method: &'static str, response: HttpResponse) -> Result<Option<R>, RpcError> {
	let envelope: RpcResponse<R> = match serde_json::from_slice(&response.body) {
		Ok(envelope) => envelope,
		Err(source) if response.is_success() => return Err(RpcError::Decode { method, source }),
		Err(_) => {
			return Err(RpcError::Status {
				method,
				status: response.status,
				body: String::from_utf8_lossy(&response.body).into_owned(),
			});
		}
	};

	if let Some(error) = envelope.error {
		return Err(RpcError::Rpc { method, code: error.code, message: error.message });
	}

	Ok(envelope.result)
}
