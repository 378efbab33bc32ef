//! Mock Jetstream device-management HTTP API: server, routing, and
//! request/response mapping.

pub mod app;
pub mod config;
pub mod middleware;
