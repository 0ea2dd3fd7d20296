//! Raw geolocation as reported by proxy headers.

use serde::Serialize;

/// Location fields read from CDN / reverse-proxy headers.
///
/// Every field is optional: this is what the headers said, before any
/// fallback is applied. See [`crate::domain::entities::ClientContext`] for
/// the always-populated view used by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeoLocation {
    pub country: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}
