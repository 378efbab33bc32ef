use std::sync::Arc;

use axum::{
    extract::{Extension, OriginalUri},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::SecondsFormat;

use crate::app::{dto, errors, services::AppServices};

pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    let time = services
        .clock()
        .now()
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    (StatusCode::OK, Json(dto::HealthResponse { status: "ok", time }))
}

/// Fallback for anything no route or static file matched, including a known
/// path hit with the wrong method. `OriginalUri` keeps the `/v3` prefix that
/// nesting strips.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> axum::response::Response {
    errors::route_not_found(uri.path())
}
