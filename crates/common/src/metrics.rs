use std::time::Instant;

use axum::{
	body::Body,
	http::{StatusCode, header},
	response::{IntoResponse, Response},
};
use prometheus::{Encoder, HistogramVec, IntCounterVec, Registry, TextEncoder};

/// Request / response / latency triple shared by the HTTP server and the
/// upstream RPC client.
///
/// `endpoint` is a route template on the server side and a JSON-RPC method
/// name on the client side.
#[derive(Clone, Copy)]
pub struct HttpMetrics {
	pub requests: &'static IntCounterVec,
	pub responses: &'static IntCounterVec,
	pub latency: &'static HistogramVec,
}

impl HttpMetrics {
	pub fn start(&self, endpoint: &'static str, method: &'static str) -> Instant {
		self.requests.with_label_values(&[endpoint, method]).inc();
		Instant::now()
	}

	pub fn finish_status(&self, endpoint: &'static str, method: &'static str, status: u16, start: Instant) {
		self.finish_label(endpoint, method, &status.to_string(), start);
	}

	/// Record an outcome that has no HTTP status, e.g. `error` or `rate_limited`.
	pub fn finish_label(&self, endpoint: &'static str, method: &'static str, status_label: &str, start: Instant) {
		self.latency.with_label_values(&[endpoint, method]).observe(start.elapsed().as_secs_f64());
		self.responses.with_label_values(&[endpoint, method, status_label]).inc();
	}
}

/// Render every metric family of the given registries in the Prometheus text format.
pub fn render_registries(registries: &[&Registry]) -> Response {
	let encoder = TextEncoder::new();
	let mut buffer = Vec::new();

	for registry in registries {
		if encoder.encode(&registry.gather(), &mut buffer).is_err() {
			return StatusCode::INTERNAL_SERVER_ERROR.into_response();
		}
	}

	([(header::CONTENT_TYPE, encoder.format_type().to_string())], Body::from(buffer)).into_response()
}

#[cfg(test)]
mod tests {
	use prometheus::{HistogramOpts, Opts};

	use super::*;

	fn leak<T>(value: T) -> &'static T {
		Box::leak(Box::new(value))
	}

	fn test_metrics(registry: &Registry) -> HttpMetrics {
		let requests = leak(IntCounterVec::new(Opts::new("test_requests_total", "requests"), &["endpoint", "method"]).unwrap());
		let responses = leak(
			IntCounterVec::new(Opts::new("test_responses_total", "responses"), &["endpoint", "method", "status"]).unwrap(),
		);
		let latency =
			leak(HistogramVec::new(HistogramOpts::new("test_latency_seconds", "latency"), &["endpoint", "method"]).unwrap());

		registry.register(Box::new(requests.clone())).unwrap();
		registry.register(Box::new(responses.clone())).unwrap();
		registry.register(Box::new(latency.clone())).unwrap();

		HttpMetrics { requests, responses, latency }
	}

	#[test]
	fn test_start_and_finish_record_labels() {
		let registry = Registry::new();
		let metrics = test_metrics(&registry);

		let start = metrics.start("/blockreward/{slot}", "GET");
		metrics.finish_status("/blockreward/{slot}", "GET", 404, start);
		let start = metrics.start("eth_syncing", "POST");
		metrics.finish_label("eth_syncing", "POST", "rate_limited", start);

		assert_eq!(metrics.requests.with_label_values(&["/blockreward/{slot}", "GET"]).get(), 1);
		assert_eq!(metrics.responses.with_label_values(&["/blockreward/{slot}", "GET", "404"]).get(), 1);
		assert_eq!(metrics.responses.with_label_values(&["eth_syncing", "POST", "rate_limited"]).get(), 1);
		assert_eq!(metrics.latency.with_label_values(&["eth_syncing", "POST"]).get_sample_count(), 1);
	}

	#[test]
	fn test_render_registries_returns_text_format() {
		let registry = Registry::new();
		let metrics = test_metrics(&registry);
		let start = metrics.start("/health", "GET");
		metrics.finish_status("/health", "GET", 200, start);

		let response = render_registries(&[&registry]);
		assert_eq!(response.status(), StatusCode::OK);
		let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
		assert!(content_type.starts_with("text/plain"));
	}
}
