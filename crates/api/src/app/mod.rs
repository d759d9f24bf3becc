//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store + service construction from config
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use catalog_infra::AppConfig;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router around an existing service instance.
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .layer(Extension(services)),
        )
}

/// Build the router with the store described by `config` (entrypoint used by `main.rs`).
pub fn build_app_from_config(config: &AppConfig) -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services(&config.storage)?);
    Ok(build_app(services))
}
