//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with the configured outbound targets.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// Checks are configuration-level only; no outbound call is made, so the
/// endpoint stays cheap enough for load balancer probes.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "mode": "production",
///   "checks": {
///     "resolver": { "status": "ok", "message": "Internal base: http://127.0.0.1:3000/" },
///     "upstream": { "status": "disabled", "message": "UPSTREAM_URL not set" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mode: state.mode.as_str().to_string(),
        checks: HealthChecks {
            resolver: check_resolver(&state),
            upstream: check_upstream(&state),
        },
    })
}

fn check_resolver(state: &AppState) -> CheckStatus {
    let settings = state.redirect_service.settings();
    if settings.production {
        CheckStatus::ok(format!("Internal base: {}", settings.internal_base_url))
    } else {
        CheckStatus::ok("Request origin")
    }
}

fn check_upstream(state: &AppState) -> CheckStatus {
    match &state.upstream {
        Some(upstream) => CheckStatus::ok(format!("Forwarding to {}", upstream.base())),
        None => CheckStatus::disabled("UPSTREAM_URL not set"),
    }
}
