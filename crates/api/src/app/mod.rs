//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: owned stores and the command simulator
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: query/response DTOs
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, handler::HandlerWithoutStateExt};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router with production services (public entrypoint
/// used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Result<Router, serde_json::Error> {
    let services = Arc::new(AppServices::seeded()?);
    Ok(build_router(services, config))
}

/// Build the router around caller-supplied services.
pub fn build_router(services: Arc<AppServices>, config: &ApiConfig) -> Router {
    let access = middleware::AccessKeyState::new(config.require_auth, config.access_key.as_str());

    // `route_layer` so unmatched paths reach the fallback without the gate.
    let api = routes::router()
        .layer(Extension(services))
        .route_layer(axum::middleware::from_fn_with_state(
            access,
            middleware::access_key_middleware,
        ));

    let app = match &config.static_dir {
        Some(dir) => {
            let static_files = ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(routes::system::not_found.into_service());
            api.fallback_service(static_files)
        }
        None => api.fallback(routes::system::not_found),
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
