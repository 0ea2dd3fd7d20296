//! Gateway middleware: runs every inbound request through the short-link
//! pipeline before routing.

use axum::{
    extract::{Request, State},
    http::{Uri, uri::PathAndQuery},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, warn};

use crate::api::middleware::dashboard_guard::GuardOutcome;
use crate::domain::eligibility::is_protected;
use crate::domain::entities::{IncomingRequest, RedirectDecision};
use crate::state::AppState;

/// Applies the gateway decision to a request.
///
/// # Flow
///
/// 1. Dashboard paths go to the [`crate::api::middleware::dashboard_guard::RouteGuard`]
/// 2. Everything else goes to [`crate::application::services::RedirectService::decide`]:
///    - `Redirect` → `307 Temporary Redirect` to the target
///    - `Rewrite` → the URI path is replaced and routing continues
///    - `Continue` → routing continues untouched
///
/// Must wrap the router as a service (not `Router::layer`) so a rewritten
/// path is routed again.
///
/// # Example
///
/// ```rust,ignore
/// let gateway = middleware::from_fn_with_state(state.clone(), short_link::layer)
///     .layer(router);
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if is_protected(parts.uri.path()) {
        return match state.route_guard.check(parts.uri.path(), &parts.headers) {
            GuardOutcome::Allow => next.run(Request::from_parts(parts, body)).await,
            GuardOutcome::Redirect(location) => {
                debug!(path = parts.uri.path(), "Dashboard request without session");
                Redirect::temporary(&location).into_response()
            }
        };
    }

    let decision = {
        let incoming = IncomingRequest::new(&parts.method, &parts.uri, &parts.headers);
        state.redirect_service.decide(&incoming).await
    };

    match decision {
        RedirectDecision::Redirect(target) => Redirect::temporary(&target).into_response(),
        RedirectDecision::Rewrite(path) => {
            match rewrite_uri(&parts.uri, &path) {
                Some(uri) => parts.uri = uri,
                None => warn!(rewrite = %path, "Failed to apply rewrite, passing request through"),
            }
            next.run(Request::from_parts(parts, body)).await
        }
        RedirectDecision::Continue => next.run(Request::from_parts(parts, body)).await,
    }
}

/// Replaces the path (and drops the query) of `uri`, keeping scheme and
/// authority.
fn rewrite_uri(uri: &Uri, path: &str) -> Option<Uri> {
    let mut uri_parts = uri.clone().into_parts();
    uri_parts.path_and_query = Some(PathAndQuery::try_from(path).ok()?);
    Uri::from_parts(uri_parts).ok()
}
