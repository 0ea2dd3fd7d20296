//! Read-only view of an inbound request.

use axum::http::{HeaderMap, Method, Uri, header};
use url::{Url, form_urlencoded};

use crate::utils::request_host::{RequestHost, extract_request_host};

/// Borrowed view of the request the pipeline classifies.
///
/// Built once per request by the gateway middleware and discarded once a
/// decision has been made.
#[derive(Debug, Clone)]
pub struct IncomingRequest<'a> {
    pub method: &'a Method,
    pub uri: &'a Uri,
    pub headers: &'a HeaderMap,
    pub host: Option<RequestHost>,
}

impl<'a> IncomingRequest<'a> {
    pub fn new(method: &'a Method, uri: &'a Uri, headers: &'a HeaderMap) -> Self {
        Self {
            method,
            uri,
            headers,
            host: extract_request_host(headers, uri),
        }
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Scheme the client used: `X-Forwarded-Proto` when a TLS-terminating
    /// proxy sits in front, otherwise the URI scheme, otherwise `http`.
    pub fn scheme(&self) -> &'static str {
        let forwarded = self
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim);

        match forwarded {
            Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
            Some(proto) if proto.eq_ignore_ascii_case("http") => "http",
            _ => match self.uri.scheme_str() {
                Some("https") => "https",
                _ => "http",
            },
        }
    }

    /// Origin of the request (`scheme://authority`), if the host is known.
    pub fn origin(&self) -> Option<Url> {
        let host = self.host.as_ref()?;
        Url::parse(&format!("{}://{}", self.scheme(), host.authority)).ok()
    }

    /// Absolute URL of the request, if the host is known.
    pub fn url(&self) -> Option<Url> {
        let origin = self.origin()?;
        let path_and_query = self
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        origin.join(path_and_query).ok()
    }

    /// First value of a query-string parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.uri.query()?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Header value as a string, empty when absent or not valid UTF-8.
    pub fn header_or_empty(&self, name: header::HeaderName) -> String {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    /// Whether the request targets a loopback/development host.
    pub fn is_local_host(&self) -> bool {
        self.host.as_ref().is_some_and(RequestHost::is_local)
    }
}
