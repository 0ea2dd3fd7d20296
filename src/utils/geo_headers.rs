//! Geolocation derivation from CDN and reverse-proxy headers.
//!
//! Three header families are probed in a fixed vendor order: CDN edge
//! (Cloudflare, then Vercel), CDN viewer (CloudFront) and generic GeoIP
//! headers added by a reverse proxy. Each field is resolved on its own, so
//! a request may take its country from Cloudflare and its city from
//! CloudFront.

use axum::http::HeaderMap;
use percent_encoding::percent_decode_str;

use crate::domain::entities::GeoLocation;

/// Location field a geo header carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoField {
    Country,
    City,
    Region,
    Latitude,
    Longitude,
}

/// Geo headers in priority order. Earlier entries win per field.
pub const GEO_HEADERS: &[(&str, GeoField)] = &[
    // CDN edge
    ("cf-ipcountry", GeoField::Country),
    ("cf-ipcity", GeoField::City),
    ("cf-region", GeoField::Region),
    ("cf-iplatitude", GeoField::Latitude),
    ("cf-iplongitude", GeoField::Longitude),
    ("x-vercel-ip-country", GeoField::Country),
    ("x-vercel-ip-city", GeoField::City),
    ("x-vercel-ip-country-region", GeoField::Region),
    ("x-vercel-ip-latitude", GeoField::Latitude),
    ("x-vercel-ip-longitude", GeoField::Longitude),
    // CDN viewer
    ("cloudfront-viewer-country", GeoField::Country),
    ("cloudfront-viewer-city", GeoField::City),
    ("cloudfront-viewer-country-region", GeoField::Region),
    ("cloudfront-viewer-latitude", GeoField::Latitude),
    ("cloudfront-viewer-longitude", GeoField::Longitude),
    // Reverse-proxy GeoIP
    ("x-geoip-country", GeoField::Country),
    ("x-geoip-city", GeoField::City),
    ("x-geoip-region", GeoField::Region),
    ("x-geoip-latitude", GeoField::Latitude),
    ("x-geoip-longitude", GeoField::Longitude),
];

/// Cloudflare placeholders: `XX` is "no country", `T1` is Tor.
const PLACEHOLDER_COUNTRIES: &[&str] = &["XX", "T1"];

/// Reads every geo field from `headers`.
pub fn extract_geo(headers: &HeaderMap) -> GeoLocation {
    GeoLocation {
        country: first_value(headers, GeoField::Country),
        city: first_value(headers, GeoField::City),
        region: first_value(headers, GeoField::Region),
        latitude: first_value(headers, GeoField::Latitude),
        longitude: first_value(headers, GeoField::Longitude),
    }
}

/// Returns the first usable value for `field`, walking [`GEO_HEADERS`] in order.
pub fn first_value(headers: &HeaderMap, field: GeoField) -> Option<String> {
    GEO_HEADERS
        .iter()
        .filter(|(_, f)| *f == field)
        .find_map(|(name, _)| read(headers, name, field))
}

fn read(headers: &HeaderMap, name: &str, field: GeoField) -> Option<String> {
    let raw = headers.get(name)?.to_str().ok()?;
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    let value = decoded.trim();
    if value.is_empty() {
        return None;
    }

    if field == GeoField::Country {
        let code = value.to_ascii_uppercase();
        if PLACEHOLDER_COUNTRIES.contains(&code.as_str()) {
            return None;
        }
        return Some(code);
    }

    Some(value.to_string())
}
