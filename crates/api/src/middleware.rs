use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::app::errors;

/// Header carrying the shared access key (matched case-insensitively).
pub const ACCESS_KEY_HEADER: &str = "accesskey";

#[derive(Clone)]
pub struct AccessKeyState {
    pub required: bool,
    pub key: Arc<str>,
}

impl AccessKeyState {
    pub fn new(required: bool, key: impl Into<Arc<str>>) -> Self {
        Self {
            required,
            key: key.into(),
        }
    }

    fn admits(&self, headers: &HeaderMap) -> bool {
        !self.required || extract_access_key(headers) == Some(&*self.key)
    }
}

/// Optional shared-secret gate; a no-op unless `required` is set.
pub async fn access_key_middleware(
    State(state): State<AccessKeyState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    if !state.admits(req.headers()) {
        tracing::debug!(path = %req.uri().path(), "rejected request without valid access key");
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Provide a valid AccessKey header.",
        );
    }

    next.run(req).await
}

fn extract_access_key(headers: &HeaderMap) -> Option<&str> {
    let key = headers.get(ACCESS_KEY_HEADER)?.to_str().ok()?;
    if key.is_empty() {
        return None;
    }
    Some(key)
}
