use lazy_static::lazy_static;
use prometheus::{
	HistogramVec, IntCounterVec, Registry, register_histogram_vec_with_registry, register_int_counter_vec_with_registry,
};

use common::metrics::HttpMetrics;

pub const RPC_CLIENT_REGISTRY_NAME: &str = "validator_api_rpc";

lazy_static! {
	pub static ref RPC_CLIENT_REGISTRY: Registry =
		Registry::new_custom(Some(RPC_CLIENT_REGISTRY_NAME.to_string()), None).unwrap();

	// Outbound JSON-RPC calls, labelled by RPC method
	pub static ref RPC_CLIENT_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec_with_registry!(
		"rpc_client_requests_total",
		"Total JSON-RPC requests to the upstream provider by method",
		&["endpoint", "method"],
		RPC_CLIENT_REGISTRY
	)
	.unwrap();

	pub static ref RPC_CLIENT_RESPONSES_TOTAL: IntCounterVec = register_int_counter_vec_with_registry!(
		"rpc_client_responses_total",
		"Total JSON-RPC responses from the upstream provider by method and status",
		&["endpoint", "method", "status"],
		RPC_CLIENT_REGISTRY
	)
	.unwrap();

	pub static ref RPC_CLIENT_LATENCY_SECONDS: HistogramVec = register_histogram_vec_with_registry!(
		"rpc_client_latency_seconds",
		"JSON-RPC request latency in seconds by method",
		&["endpoint", "method"],
		RPC_CLIENT_REGISTRY
	)
	.unwrap();
}

pub fn client_http_metrics() -> HttpMetrics {
	HttpMetrics {
		requests: &RPC_CLIENT_REQUESTS_TOTAL,
		responses: &RPC_CLIENT_RESPONSES_TOTAL,
		latency: &RPC_CLIENT_LATENCY_SECONDS,
	}
}
