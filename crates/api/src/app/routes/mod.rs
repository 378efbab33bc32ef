use axum::{Router, routing::get};

pub mod commands;
pub mod devices;
pub mod events;
pub mod inventory;
pub mod policies;
pub mod system;

/// Router for every API endpoint (`/health` plus the `/v3` surface).
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health).fallback(system::not_found))
        .nest("/v3", v3_router())
}

fn v3_router() -> Router {
    Router::new()
        .nest("/devices", devices::router())
        .nest("/inventory", inventory::router())
        .nest("/events", events::router())
        .nest("/commands", commands::router())
        .nest("/policies", policies::router())
}
