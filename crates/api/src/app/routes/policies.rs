use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};

use super::system::not_found;
use crate::app::{dto, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/", get(list_policies).fallback(not_found))
}

pub async fn list_policies(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(dto::ListResponse::from(services.policies().list()))
}
