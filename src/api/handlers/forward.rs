//! Fallback handler for everything the gateway does not serve itself.

use axum::{
    extract::{Request, State},
    response::Response,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Forwards the request to the upstream page renderer.
///
/// Reached by pass-through requests, cloak rewrites and dashboard pages
/// that cleared the route guard.
///
/// # Errors
///
/// - `404 Not Found` when no upstream is configured
/// - `502 Bad Gateway` when the upstream cannot be reached
pub async fn forward_handler(
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let Some(upstream) = state.upstream.as_ref() else {
        return Err(AppError::not_found(
            "Not found",
            json!({ "path": req.uri().path() }),
        ));
    };

    upstream.forward(req).await
}
