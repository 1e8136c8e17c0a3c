use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use cleanops_workforce::{WorkerId, WorkerPatch};

use crate::app::routes::{json_body, parse_id};
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(register_worker).get(list_workers))
        .route("/:id", get(get_worker).patch(update_worker).delete(delete_worker))
        .route("/:id/toggle-status", post(toggle_worker_status))
}

pub async fn register_worker(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RegisterWorkerRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match json_body(body) {
        Ok(b) => b,
        Err(resp) => return resp,
    };

    match services.workers.register(body.profile, body.availability).await {
        Ok(worker) => (StatusCode::CREATED, Json(dto::worker_view(&worker))).into_response(),
        Err(e) => errors::roster_error_to_response(e),
    }
}

pub async fn list_workers(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.workers.list().await {
        Ok(workers) => {
            let items = workers.iter().map(dto::worker_view).collect();
            (StatusCode::OK, Json(dto::Items { items })).into_response()
        }
        Err(e) => errors::roster_error_to_response(e),
    }
}

pub async fn get_worker(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: WorkerId = match parse_id(&id, "worker") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.workers.get(id).await {
        Ok(worker) => (StatusCode::OK, Json(dto::worker_view(&worker))).into_response(),
        Err(e) => errors::roster_error_to_response(e),
    }
}

pub async fn update_worker(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<WorkerPatch>, JsonRejection>,
) -> axum::response::Response {
    let id: WorkerId = match parse_id(&id, "worker") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let patch = match json_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match services.workers.update(id, patch).await {
        Ok(worker) => (StatusCode::OK, Json(dto::worker_view(&worker))).into_response(),
        Err(e) => errors::roster_error_to_response(e),
    }
}

pub async fn toggle_worker_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: WorkerId = match parse_id(&id, "worker") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.workers.toggle_status(id).await {
        Ok(worker) => (StatusCode::OK, Json(dto::worker_view(&worker))).into_response(),
        Err(e) => errors::roster_error_to_response(e),
    }
}

pub async fn delete_worker(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: WorkerId = match parse_id(&id, "worker") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.workers.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::roster_error_to_response(e),
    }
}
