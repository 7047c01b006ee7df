//! HTTP surface of the validator API: routes, handlers, response bodies and
//! configuration.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod server;
pub mod types;

pub use api::ValidatorApi;
pub use crate::config::ApiConfig;
pub use server::{build_router, run_server};

#[cfg(any(test, feature = "test-utils"))]
pub use api::MockValidatorApi;
