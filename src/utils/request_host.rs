//! Host extraction from HTTP request headers.

use axum::http::{HeaderMap, Uri, header};
use std::net::IpAddr;

/// Host a request was addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHost {
    /// Hostname without port (IPv6 literals keep their brackets).
    pub hostname: String,
    /// Hostname with port, exactly as the client sent it.
    pub authority: String,
}

impl RequestHost {
    /// Parses a `Host` header value.
    ///
    /// Handles:
    /// - IPv4 addresses (e.g., `192.168.1.1`)
    /// - IPv6 addresses (e.g., `[::1]`)
    /// - Hostnames with ports (e.g., `example.com:3000`)
    /// - Plain hostnames (e.g., `example.com`)
    ///
    /// Returns `None` for an empty value.
    pub fn parse(host: &str) -> Option<Self> {
        let host = host.trim();
        if host.is_empty() {
            return None;
        }

        let hostname = if host.starts_with('[') {
            // IPv6 address (e.g., [::1] or [::1]:8080)
            match host.find(']') {
                Some(end_bracket) => host[..=end_bracket].to_string(),
                None => host.to_string(),
            }
        } else {
            host.split(':').next().unwrap_or(host).to_string()
        };

        Some(Self {
            hostname: hostname.to_ascii_lowercase(),
            authority: host.to_string(),
        })
    }

    /// Returns true for loopback and development hosts.
    ///
    /// Matches `localhost`, any `*.localhost` name, loopback addresses
    /// (`127.0.0.0/8`, `::1`) and the unspecified address `0.0.0.0`.
    pub fn is_local(&self) -> bool {
        let name = self.hostname.as_str();
        if name == "localhost" || name.ends_with(".localhost") {
            return true;
        }

        name.trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback() || ip.is_unspecified())
            .unwrap_or(false)
    }
}

/// Extracts the request host from the `Host` header, falling back to the
/// URI authority (HTTP/2 requests carry it there).
pub fn extract_request_host(headers: &HeaderMap, uri: &Uri) -> Option<RequestHost> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(RequestHost::parse)
        .or_else(|| uri.authority().and_then(|a| RequestHost::parse(a.as_str())))
}
