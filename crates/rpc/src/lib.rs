//! Minimal JSON-RPC 2.0 client for the upstream chain data provider.

pub mod client;
pub mod constants;
pub mod error;
pub mod metrics;
pub mod types;

pub use client::{HttpResponse, JsonRpcClient, ReqwestTransport, RpcTransport};
pub use error::RpcError;
pub use types::RpcConfig;

#[cfg(any(test, feature = "test-utils"))]
pub use client::MockRpcTransport;
