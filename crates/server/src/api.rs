use async_trait::async_trait;
use eyre::Result;
use rpc::RpcTransport;
use service::{BlockReward, ServiceError, SlotService, SyncDutySet};

/// Server side contract of the validator API.
///
/// The router only depends on this trait, so handlers can be exercised
/// without an upstream provider.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ValidatorApi: Send + Sync + 'static {
	/// GET /blockreward/{slot}
	async fn block_reward(&self, slot: u64) -> Result<BlockReward, ServiceError>;

	/// GET /syncduties/{slot}
	async fn sync_duties(&self, slot: u64) -> Result<SyncDutySet, ServiceError>;

	/// GET /health
	async fn health_check(&self) -> Result<()>;
}

#[async_trait]
impl<T: RpcTransport> ValidatorApi for SlotService<T> {
	async fn block_reward(&self, slot: u64) -> Result<BlockReward, ServiceError> {
		SlotService::block_reward(self, slot).await
	}

	async fn sync_duties(&self, slot: u64) -> Result<SyncDutySet, ServiceError> {
		SlotService::sync_duties(self, slot).await
	}

	// Healthy while the upstream answers `eth_syncing`, whatever the sync state.
	async fn health_check(&self) -> Result<()> {
		self.rpc().syncing().await?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use rpc::{HttpResponse, JsonRpcClient, MockRpcTransport, RpcConfig};
	use serde_json::{Value, json};

	use super::*;

	fn api(transport: MockRpcTransport) -> SlotService<MockRpcTransport> {
		let config = RpcConfig {
			endpoint: "http://localhost:8545".to_string(),
			request_timeout_secs: 10,
			request_delay_ms: 0,
			rate_limit_backoff_ms: 0,
			max_rate_limit_retries: 0,
		};
		SlotService::new(JsonRpcClient::new(config, transport).unwrap())
	}

	#[tokio::test]
	async fn test_health_check_calls_upstream() {
		let mut transport = MockRpcTransport::new();
		transport.expect_post_json().times(1).returning(|_, body| {
			let request: Value = serde_json::from_slice(&body).unwrap();
			assert_eq!(request["method"], "eth_syncing");
			let body = json!({ "jsonrpc": "2.0", "id": 1, "result": false });
			Ok(HttpResponse { status: 200, body: serde_json::to_vec(&body).unwrap() })
		});

		assert!(api(transport).health_check().await.is_ok());
	}

	#[tokio::test]
	async fn test_health_check_fails_when_upstream_unreachable() {
		let mut transport = MockRpcTransport::new();
		transport.expect_post_json().times(1).returning(|_, _| Err(eyre::eyre!("connection refused")));

		assert!(api(transport).health_check().await.is_err());
	}

	#[tokio::test]
	async fn test_health_check_fails_on_server_error() {
		let mut transport = MockRpcTransport::new();
		transport
			.expect_post_json()
			.returning(|_, _| Ok(HttpResponse { status: 503, body: b"service unavailable".to_vec() }));

		assert!(api(transport).health_check().await.is_err());
	}
}
