use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use cleanops_core::DomainError;
use cleanops_infra::{OrderBookError, RosterError, StoreError};

pub fn order_book_error_to_response(err: OrderBookError) -> axum::response::Response {
    match err {
        OrderBookError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        OrderBookError::UnknownWorker(_) | OrderBookError::Pricing(_) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
        }
        OrderBookError::Domain(e) => domain_error_to_response(e),
        OrderBookError::Store(e) => store_error_to_response(e),
    }
}

pub fn roster_error_to_response(err: RosterError) -> axum::response::Response {
    match err {
        RosterError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        RosterError::Domain(e) => domain_error_to_response(e),
        RosterError::Store(e) => store_error_to_response(e),
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        StoreError::Conflict => json_error(StatusCode::CONFLICT, "conflict", err.to_string()),
        StoreError::Unavailable(_) => {
            tracing::error!(error = %err, "record store failure");
            json_error(StatusCode::SERVICE_UNAVAILABLE, "store_error", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
