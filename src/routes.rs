//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /api/geo`     - Geolocation diagnostics
//! - `GET  /api/health`  - Health check
//! - everything else     - Forwarded to the upstream renderer
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//! - **Short-link gateway** - Dashboard guard, redirect, cloak rewrite
//!
//! The gateway wraps the router as a service, so a cloak rewrite is routed
//! like any other request (to the upstream fallback).

use crate::api;
use crate::api::handlers::forward_handler;
use crate::api::middleware::{short_link, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let router = Router::new()
        .nest("/api", api::routes::routes())
        .fallback(forward_handler)
        .with_state(state.clone());

    let gateway = middleware::from_fn_with_state(state, short_link::layer).layer(router);
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(gateway);

    Router::new()
        .fallback_service(normalized)
        .layer(tracing::layer())
}
