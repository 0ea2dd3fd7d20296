//! HTTP request/response tracing middleware.

use axum::extract::Request;
use axum::http::header::HOST;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

type MakeSpanFn = fn(&Request) -> Span;

/// Creates the tracing layer for all gateway traffic.
///
/// Spans are opened at `INFO` before the short-link middleware runs, so the
/// logged path is the one the client asked for, not a cloak rewrite.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET host=sho.rt path=/abc123}: finished processing request latency=14 ms status=307
/// INFO request{method=GET host=sho.rt path=/api/health}: finished processing request latency=0 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, MakeSpanFn> {
    TraceLayer::new_for_http()
        .make_span_with(make_span as MakeSpanFn)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(req: &Request) -> Span {
    let host = req
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        method = %req.method(),
        host = host,
        path = req.uri().path(),
    )
}
