//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: record stores and the services built on them
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use cleanops_auth::IdentityGate;
use cleanops_infra::config::Config;

use crate::middleware::{self, Gate};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &Config) -> Router {
    let (tokens, admins) = config.identity();
    build_app_with(
        Arc::new(services::build_services()),
        Arc::new(IdentityGate::new(tokens, admins)),
    )
}

/// Build the router around existing services and an identity gate.
pub fn build_app_with(services: Arc<services::AppServices>, gate: Arc<Gate>) -> Router {
    let auth_state = middleware::AuthState { gate };

    // Protected routes: require an admin principal.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
