use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use cleanops_orders::{ServiceOrderId, ServiceOrderPatch};

use crate::app::routes::{json_body, parse_id};
use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order).patch(update_order).delete(delete_order))
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    body: Result<Json<dto::CreateOrderRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match json_body(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let new = match body.into_new_order() {
        Ok(n) => n,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string()),
    };

    match services.orders.create(new).await {
        Ok(order) => {
            tracing::info!(
                principal_id = %principal.principal_id(),
                order_id = %order.id_typed(),
                "order created via api"
            );
            (StatusCode::CREATED, Json(order)).into_response()
        }
        Err(e) => errors::order_book_error_to_response(e),
    }
}

pub async fn list_orders(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.orders.list().await {
        Ok(orders) => (StatusCode::OK, Json(dto::order_items(&orders))).into_response(),
        Err(e) => errors::order_book_error_to_response(e),
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ServiceOrderId = match parse_id(&id, "order") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.orders.get(id).await {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => errors::order_book_error_to_response(e),
    }
}

pub async fn update_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ServiceOrderPatch>, JsonRejection>,
) -> axum::response::Response {
    let id: ServiceOrderId = match parse_id(&id, "order") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let patch = match json_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match services.orders.update(id, patch).await {
        Ok(order) => (StatusCode::OK, Json(order)).into_response(),
        Err(e) => errors::order_book_error_to_response(e),
    }
}

pub async fn delete_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ServiceOrderId = match parse_id(&id, "order") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.orders.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::order_book_error_to_response(e),
    }
}
