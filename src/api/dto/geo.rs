//! DTO for the geolocation diagnostics endpoint.

use serde::Serialize;

use crate::domain::entities::GeoLocation;

/// What the gateway can read about the caller from proxy headers alone.
///
/// No local-host simulation or `Unknown` placeholders are applied: absent
/// values are omitted from the JSON body.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct GeoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl GeoResponse {
    pub fn new(geo: GeoLocation, ip: Option<String>) -> Self {
        Self {
            country: geo.country,
            city: geo.city,
            region: geo.region,
            latitude: geo.latitude,
            longitude: geo.longitude,
            ip,
        }
    }
}
