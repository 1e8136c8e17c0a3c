use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use cleanops_infra::projections::DashboardSummary;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::DashboardParams>,
) -> axum::response::Response {
    let today = params.date.unwrap_or_else(|| Utc::now().date_naive());

    let orders = match services.orders.list().await {
        Ok(o) => o,
        Err(e) => return errors::order_book_error_to_response(e),
    };
    let workers = match services.workers.list().await {
        Ok(w) => w,
        Err(e) => return errors::roster_error_to_response(e),
    };

    Json(DashboardSummary::compute(&orders, &workers, today)).into_response()
}
