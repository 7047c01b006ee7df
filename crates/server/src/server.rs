use std::{future::Future, sync::Arc};

use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::get,
};
use eyre::{Result, WrapErr};
use tokio::net::{TcpListener, ToSocketAddrs};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::api::ValidatorApi;
use crate::error::{ApiError, parse_slot};
use crate::metrics::{server_http_metrics, server_metrics_handler};
use crate::routes;
use crate::types::{BlockRewardResponse, SyncDutiesResponse};

const BLOCK_REWARD_FUTURE_MESSAGE: &str = "Slot is in the future";
const SYNC_DUTIES_FUTURE_MESSAGE: &str = "Slot is too far in the future";

/// Build an Axum router for the validator API,
/// using any implementation of `ValidatorApi`.
pub fn build_router<A>(api: A) -> Router
where
	A: ValidatorApi,
{
	let state = Arc::new(api);

	Router::new()
		.route(routes::HEALTH, get(health::<A>))
		.route(routes::BLOCK_REWARD, get(get_block_reward::<A>))
		.route(routes::SYNC_DUTIES, get(get_sync_duties::<A>))
		.route(routes::METRICS, get(server_metrics_handler))
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(state)
}

/// Serve the router on `addr` until `shutdown` resolves.
pub async fn run_server<A, F>(api: A, addr: impl ToSocketAddrs, shutdown: F) -> Result<()>
where
	A: ValidatorApi,
	F: Future<Output = ()> + Send + 'static,
{
	let listener = TcpListener::bind(addr).await.wrap_err("failed to bind validator API listener")?;
	info!("Starting validator API server on {}", listener.local_addr()?);

	axum::serve(listener, build_router(api)).with_graceful_shutdown(shutdown).await.wrap_err("validator API server error")
}

// ---------- Handlers ----------

// GET /health
async fn health<A>(State(api): State<Arc<A>>) -> impl IntoResponse
where
	A: ValidatorApi,
{
	const ENDPOINT: &str = routes::HEALTH;
	const METHOD: &str = "GET";

	let metrics = server_http_metrics();
	let start = metrics.start(ENDPOINT, METHOD);

	match api.health_check().await {
		Ok(()) => {
			metrics.finish_status(ENDPOINT, METHOD, 200, start);
			StatusCode::OK
		}
		Err(_) => {
			metrics.finish_status(ENDPOINT, METHOD, 500, start);
			StatusCode::INTERNAL_SERVER_ERROR
		}
	}
}

// GET /blockreward/{slot}
async fn get_block_reward<A>(State(api): State<Arc<A>>, Path(slot): Path<String>) -> Response
where
	A: ValidatorApi,
{
	const ENDPOINT: &str = routes::BLOCK_REWARD;
	const METHOD: &str = "GET";

	let metrics = server_http_metrics();
	let start = metrics.start(ENDPOINT, METHOD);

	let response = match parse_slot(&slot) {
		Ok(slot) => match api.block_reward(slot).await {
			Ok(reward) => (StatusCode::OK, Json(BlockRewardResponse::from(reward))).into_response(),
			Err(e) => ApiError::from_service(e, BLOCK_REWARD_FUTURE_MESSAGE).into_response(),
		},
		Err(e) => e.into_response(),
	};

	metrics.finish_status(ENDPOINT, METHOD, response.status().as_u16(), start);
	response
}

// GET /syncduties/{slot}
async fn get_sync_duties<A>(State(api): State<Arc<A>>, Path(slot): Path<String>) -> Response
where
	A: ValidatorApi,
{
	const ENDPOINT: &str = routes::SYNC_DUTIES;
	const METHOD: &str = "GET";

	let metrics = server_http_metrics();
	let start = metrics.start(ENDPOINT, METHOD);

	let response = match parse_slot(&slot) {
		Ok(slot) => match api.sync_duties(slot).await {
			Ok(duties) => (StatusCode::OK, Json(SyncDutiesResponse::from(duties))).into_response(),
			Err(e) => ApiError::from_service(e, SYNC_DUTIES_FUTURE_MESSAGE).into_response(),
		},
		Err(e) => e.into_response(),
	};

	metrics.finish_status(ENDPOINT, METHOD, response.status().as_u16(), start);
	response
}
