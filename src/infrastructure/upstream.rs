//! Reverse proxy to the page renderer.
//!
//! Requests the gateway passes through (and cloak rewrites) that no local
//! route handles are forwarded here with their method, path, query and
//! body intact. Responses are streamed back, redirects included.

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use axum::response::Response;
use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::domain::entities::IncomingRequest;
use crate::error::AppError;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Connection-scoped headers that must not cross a proxy hop.
const HOP_BY_HOP: &[HeaderName] = &[
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name) || name.as_str() == "keep-alive"
}

/// Copies `source` without hop-by-hop headers or `Host`.
pub fn forwardable_headers(source: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(source.len());
    for (name, value) in source {
        if is_hop_by_hop(name) || name == header::HOST {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// Forwards requests to a fixed upstream origin.
#[derive(Clone)]
pub struct UpstreamProxy {
    client: Client,
    base: Url,
}

impl UpstreamProxy {
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Upstream URL for a request path and query.
    pub fn target_url(&self, path: &str, query: Option<&str>) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url.set_query(query);
        url
    }

    /// Forwards `req` and returns the upstream response.
    ///
    /// # Errors
    ///
    /// - [`AppError::PayloadTooLarge`] if the body exceeds [`MAX_BODY_BYTES`]
    /// - [`AppError::BadGateway`] if the upstream cannot be reached
    pub async fn forward(&self, req: Request) -> Result<Response, AppError> {
        let (parts, body) = req.into_parts();

        let incoming = IncomingRequest::new(&parts.method, &parts.uri, &parts.headers);
        let url = self.target_url(parts.uri.path(), parts.uri.query());

        let mut headers = forwardable_headers(&parts.headers);
        if let Some(host) = &incoming.host
            && let Ok(value) = HeaderValue::from_str(&host.authority)
        {
            headers.insert(X_FORWARDED_HOST, value);
        }
        headers.insert(
            X_FORWARDED_PROTO,
            HeaderValue::from_static(incoming.scheme()),
        );

        let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
            AppError::payload_too_large(
                "Request body too large",
                json!({ "limit_bytes": MAX_BODY_BYTES, "reason": e.to_string() }),
            )
        })?;

        let upstream = self
            .client
            .request(parts.method.clone(), url.clone())
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(upstream = %url, error = %e, "Upstream unreachable");
                AppError::bad_gateway(
                    "Upstream unavailable",
                    json!({ "upstream": self.base.as_str() }),
                )
            })?;

        let mut response = Response::builder().status(upstream.status());
        if let Some(response_headers) = response.headers_mut() {
            for (name, value) in upstream.headers() {
                if !is_hop_by_hop(name) {
                    response_headers.append(name.clone(), value.clone());
                }
            }
        }

        response
            .body(Body::from_stream(upstream.bytes_stream()))
            .map_err(|e| {
                AppError::internal(
                    "Failed to build upstream response",
                    json!({ "reason": e.to_string() }),
                )
            })
    }
}
