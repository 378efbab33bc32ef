use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use jetstream_core::JetstreamError;

pub fn domain_error_to_response(err: JetstreamError) -> axum::response::Response {
    let status = match err {
        JetstreamError::NotFound(_) => StatusCode::NOT_FOUND,
        JetstreamError::BadRequest(_) => StatusCode::BAD_REQUEST,
    };
    let code = err.code();
    let message = match err {
        JetstreamError::NotFound(msg) | JetstreamError::BadRequest(msg) => msg,
    };
    json_error(status, code, message)
}

/// Malformed query strings (e.g. a repeated `status` key) are client errors
/// like any other `BadRequest`.
pub fn query_rejection(rejection: QueryRejection) -> axum::response::Response {
    domain_error_to_response(JetstreamError::bad_request(rejection.body_text()))
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 404 for paths no route (or static file) matched.
pub fn route_not_found(path: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({
            "error": "NotFound",
            "path": path,
        })),
    )
        .into_response()
}
