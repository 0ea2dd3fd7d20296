//! Client IP derivation from proxy headers.
//!
//! These headers are set by whatever sits in front of the gateway and are
//! trivially spoofable when it is reachable directly. The value is only
//! forwarded to the resolver for analytics, never used for access control.

use axum::http::HeaderMap;

/// Header holding a comma-separated proxy chain; the client is the first entry.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
/// Single-address header set by nginx-style reverse proxies.
pub const X_REAL_IP: &str = "x-real-ip";
/// Cloudflare's connecting client address.
pub const CF_CONNECTING_IP: &str = "cf-connecting-ip";

/// Extracts the client IP address, first match wins:
///
/// 1. First entry of `X-Forwarded-For`, trimmed
/// 2. `X-Real-IP`
/// 3. `CF-Connecting-IP`
///
/// Empty values are skipped. Returns `None` when no header yields an address.
pub fn extract_client_ip(headers: &HeaderMap) -> Option<String> {
    forwarded_for(headers)
        .or_else(|| header_value(headers, X_REAL_IP))
        .or_else(|| header_value(headers, CF_CONNECTING_IP))
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let chain = headers.get(X_FORWARDED_FOR)?.to_str().ok()?;
    let first = chain.split(',').next()?.trim();
    (!first.is_empty()).then(|| first.to_string())
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let value = headers.get(name)?.to_str().ok()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}
