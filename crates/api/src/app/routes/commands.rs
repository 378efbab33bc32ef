use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use jetstream_devices::CommandKind;

use super::system::not_found;
use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/:device_id/door/open", post(open_door).fallback(not_found))
        .route(
            "/:device_id/inventory/snapshot",
            post(inventory_snapshot).fallback(not_found),
        )
}

pub async fn open_door(
    Extension(services): Extension<Arc<AppServices>>,
    Path(device_id): Path<String>,
) -> axum::response::Response {
    submit(&services, &device_id, CommandKind::DoorOpen)
}

pub async fn inventory_snapshot(
    Extension(services): Extension<Arc<AppServices>>,
    Path(device_id): Path<String>,
) -> axum::response::Response {
    submit(&services, &device_id, CommandKind::InventorySnapshot)
}

fn submit(services: &AppServices, device_id: &str, kind: CommandKind) -> axum::response::Response {
    match services.commands().submit(device_id, kind) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
