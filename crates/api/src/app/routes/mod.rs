use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::app::errors;

pub mod catalog;
pub mod dashboard;
pub mod orders;
pub mod quote;
pub mod system;
pub mod workers;

/// Router for all authenticated (admin-only) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/catalog", get(catalog::catalog))
        .route("/quote", post(quote::quote))
        .route("/dashboard", get(dashboard::dashboard))
        .nest("/orders", orders::router())
        .nest("/workers", workers::router())
}

/// Unwrap a JSON body, turning extractor rejections into JSON errors.
pub(crate) fn json_body<T>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, axum::response::Response> {
    body.map(|Json(v)| v)
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", e.body_text()))
}

/// Parse a path id, answering 400 on failure.
pub(crate) fn parse_id<T: core::str::FromStr>(
    raw: &str,
    what: &'static str,
) -> Result<T, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", format!("invalid {what} id"))
    })
}
