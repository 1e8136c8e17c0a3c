use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use cleanops_pricing::QuoteRequest;

use crate::app::routes::json_body;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Price a raw request. Lenient unless `?strict=true`.
pub async fn quote(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::QuoteParams>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> axum::response::Response {
    let request = match json_body(body) {
        Ok(r) => r,
        Err(resp) => return resp,
    };

    match services.orders.quote(&request, params.strict) {
        Ok(priced) => (StatusCode::OK, Json(dto::QuoteResponse::from(priced))).into_response(),
        Err(e) => errors::order_book_error_to_response(e),
    }
}
