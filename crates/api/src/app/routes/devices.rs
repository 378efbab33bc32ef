use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use jetstream_core::JetstreamError;
use jetstream_devices::DeviceStatus;

use super::system::not_found;
use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_devices).fallback(not_found))
        .route("/:id", get(get_device).fallback(not_found))
}

/// GET /v3/devices?status=ONLINE
pub async fn list_devices(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::DeviceListQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection(rejection),
    };
    let status = match dto::non_empty(query.status)
        .map(|s| s.parse::<DeviceStatus>())
        .transpose()
    {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let devices = services.devices().list(status);
    (StatusCode::OK, Json(dto::ListResponse::from(devices))).into_response()
}

pub async fn get_device(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.devices().get(&id) {
        Some(device) => (StatusCode::OK, Json(device.clone())).into_response(),
        None => errors::domain_error_to_response(JetstreamError::not_found(format!("device {id}"))),
    }
}
