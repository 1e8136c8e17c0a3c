use axum::Json;

use crate::app::dto::Catalog;

pub async fn catalog() -> Json<Catalog> {
    Json(Catalog::current())
}
