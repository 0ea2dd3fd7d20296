//! Handler for the geolocation diagnostics endpoint.

use axum::{Json, http::HeaderMap};

use crate::api::dto::geo::GeoResponse;
use crate::utils::client_ip::extract_client_ip;
use crate::utils::geo_headers::extract_geo;

/// Echoes the geolocation and client IP read from proxy headers.
///
/// # Endpoint
///
/// `GET /api/geo`
///
/// # Response
///
/// ```json
/// {
///   "country": "FR",
///   "city": "Lyon",
///   "ip": "203.0.113.7"
/// }
/// ```
pub async fn geo_handler(headers: HeaderMap) -> Json<GeoResponse> {
    Json(GeoResponse::new(
        extract_geo(&headers),
        extract_client_ip(&headers),
    ))
}
