use axum::response::Response;
use lazy_static::lazy_static;
use prometheus::{
	HistogramVec, IntCounterVec, Registry, register_histogram_vec_with_registry, register_int_counter_vec_with_registry,
};

use common::metrics::{HttpMetrics, render_registries};
use rpc::metrics::RPC_CLIENT_REGISTRY;

pub const SERVER_REGISTRY_NAME: &str = "validator_api_server";

lazy_static! {
	pub static ref SERVER_METRICS_REGISTRY: Registry =
		Registry::new_custom(Some(SERVER_REGISTRY_NAME.to_string()), None).unwrap();
	pub static ref SERVER_REQUESTS_TOTAL: IntCounterVec =
		register_int_counter_vec_with_registry!(
			"http_requests_total",
			"Total number of HTTP requests",
			&["endpoint", "method"],
			SERVER_METRICS_REGISTRY
		)
		.unwrap();
	pub static ref SERVER_RESPONSES_TOTAL: IntCounterVec =
		register_int_counter_vec_with_registry!(
			"http_responses_total",
			"Total number of HTTP responses by status",
			&["endpoint", "method", "status"],
			SERVER_METRICS_REGISTRY
		)
		.unwrap();
	pub static ref SERVER_REQUEST_LATENCY_SECONDS: HistogramVec =
		register_histogram_vec_with_registry!(
			"http_request_duration_seconds",
			"Request latency in seconds",
			&["endpoint", "method"],
			SERVER_METRICS_REGISTRY
		)
		.unwrap();
}

pub fn server_http_metrics() -> HttpMetrics {
	HttpMetrics {
		requests: &SERVER_REQUESTS_TOTAL,
		responses: &SERVER_RESPONSES_TOTAL,
		latency: &SERVER_REQUEST_LATENCY_SECONDS,
	}
}

// GET /metrics, server and upstream client families together
pub async fn server_metrics_handler() -> Response {
	render_registries(&[&SERVER_METRICS_REGISTRY, &RPC_CLIENT_REGISTRY])
}
