use axum::{
	Json,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

use crate::types::ErrorResponse;

/// Failure of a slot endpoint as seen by the caller.
///
/// Display strings are the exact `error` messages sent back; upstream detail
/// only ever reaches the logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
	#[error("Invalid slot number")]
	InvalidSlot,

	#[error("{0}")]
	FutureSlot(&'static str),

	#[error("Slot does not exist")]
	SlotNotFound,

	#[error("Internal server error")]
	Internal,
}

impl ApiError {
	/// Map a resolver error, using `future_message` for slots ahead of the chain.
	pub fn from_service(err: ServiceError, future_message: &'static str) -> Self {
		match err {
			ServiceError::FutureSlot { slot, current_slot } => {
				warn!(slot, current_slot, "Rejected future slot");
				Self::FutureSlot(future_message)
			}
			ServiceError::SlotNotFound { slot } => {
				warn!(slot, "Slot not found upstream");
				Self::SlotNotFound
			}
			ServiceError::Rpc(e) => {
				error!(error = %e, "Upstream request failed");
				Self::Internal
			}
		}
	}

	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::InvalidSlot | Self::FutureSlot(_) => StatusCode::BAD_REQUEST,
			Self::SlotNotFound => StatusCode::NOT_FOUND,
			Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status_code(), Json(ErrorResponse { error: self.to_string() })).into_response()
	}
}

/// Parse the `{slot}` path segment.
pub fn parse_slot(raw: &str) -> Result<u64, ApiError> {
	raw.trim().parse::<u64>().map_err(|_| ApiError::InvalidSlot)
}

#[cfg(test)]
mod tests {
	use rpc::RpcError;

	use super::*;

	#[test]
	fn test_parse_slot() {
		assert_eq!(parse_slot("4700000"), Ok(4_700_000));
		assert_eq!(parse_slot("0"), Ok(0));
		assert_eq!(parse_slot("abc"), Err(ApiError::InvalidSlot));
		assert_eq!(parse_slot("-1"), Err(ApiError::InvalidSlot));
		assert_eq!(parse_slot("1.5"), Err(ApiError::InvalidSlot));
		assert_eq!(parse_slot(""), Err(ApiError::InvalidSlot));
	}

	#[test]
	fn test_service_error_mapping() {
		let future = ApiError::from_service(ServiceError::FutureSlot { slot: 10, current_slot: 5 }, "Slot is in the future");
		assert_eq!(future, ApiError::FutureSlot("Slot is in the future"));
		assert_eq!(future.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(future.to_string(), "Slot is in the future");

		let missing = ApiError::from_service(ServiceError::SlotNotFound { slot: 10 }, "");
		assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(missing.to_string(), "Slot does not exist");

		let upstream = ApiError::from_service(
			ServiceError::Rpc(RpcError::RateLimited { method: "eth_getBlockByNumber", attempts: 6 }),
			"",
		);
		assert_eq!(upstream, ApiError::Internal);
		assert_eq!(upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(upstream.to_string(), "Internal server error");
	}
}
