//! Gateway-owned API routes, mounted under `/api`.

use crate::api::handlers::{geo_handler, health_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Diagnostic endpoints.
///
/// # Endpoints
///
/// - `GET /geo`    - Geolocation and client IP as seen from proxy headers
/// - `GET /health` - Service health and configured outbound targets
///
/// Other `/api/*` paths fall through to the upstream.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/geo", get(geo_handler))
        .route("/health", get(health_handler))
}
