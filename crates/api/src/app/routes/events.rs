//! Event log endpoints: newest-first listing and the no-op acknowledge.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use jetstream_core::JetstreamError;
use jetstream_devices::{EventFilter, EventType, acknowledge};

use super::system::not_found;
use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_events).fallback(not_found))
        .route("/acknowledge", post(acknowledge_events).fallback(not_found))
}

/// GET /v3/events?deviceId=X&type=Y
///
/// Both filters are exact matches; results are sorted by `occurredUtc`,
/// newest first.
pub async fn list_events(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::EventListQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection(rejection),
    };
    let event_type = match dto::non_empty(query.event_type)
        .map(|t| t.parse::<EventType>())
        .transpose()
    {
        Ok(t) => t,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let filter = EventFilter {
        device_id: dto::non_empty(query.device_id),
        event_type,
    };

    let events = services.events().query(&filter);
    (StatusCode::OK, Json(dto::ListResponse::from(events))).into_response()
}

/// POST /v3/events/acknowledge  `{"ids": ["EVT-1", ...]}`
///
/// Echoes the ids back; the event log is not modified. The body is parsed by
/// hand so a wrong shape maps to our own 400 rather than an extractor
/// rejection.
pub async fn acknowledge_events(body: Bytes) -> axum::response::Response {
    let body: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            return errors::domain_error_to_response(JetstreamError::bad_request(format!(
                "request body must be JSON: {e}"
            )));
        }
    };

    match acknowledge(&body) {
        Ok(ids) => {
            tracing::debug!(count = ids.len(), "events acknowledged");
            (StatusCode::OK, Json(dto::AcknowledgeResponse { acknowledged: ids })).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
