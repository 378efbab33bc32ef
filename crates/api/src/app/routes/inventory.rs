use std::sync::Arc;

use axum::{
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use super::system::not_found;
use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/", get(list_inventory).fallback(not_found))
}

/// GET /v3/inventory?deviceId=DEV-1001
///
/// Unknown device ids yield an empty list rather than a 404.
pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::InventoryQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection(rejection),
    };
    let device_id = dto::non_empty(query.device_id);
    let items = services.inventory().list(device_id.as_deref());
    (StatusCode::OK, Json(dto::ListResponse::from(items))).into_response()
}
