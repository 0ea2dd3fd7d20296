//! Client context sent to the link resolver.

use crate::domain::continent::continent_for;
use crate::domain::entities::GeoLocation;

/// Placeholder for any field that could not be derived.
pub const UNKNOWN: &str = "Unknown";

/// Simulated country for requests addressed to a local host.
pub const LOCAL_COUNTRY: &str = "US";
/// Simulated city for requests addressed to a local host.
pub const LOCAL_CITY: &str = "San Francisco";
/// Simulated continent for requests addressed to a local host.
pub const LOCAL_CONTINENT: &str = "NA";

/// Who is asking, as far as the gateway can tell.
///
/// Unlike [`GeoLocation`], every string field is always populated: missing
/// values fall back to [`UNKNOWN`], or to the `LOCAL_*` simulation values
/// when the request targets a loopback/development host. This keeps the
/// resolver query well-formed for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    pub ip: Option<String>,
    pub country: String,
    pub city: String,
    pub continent: String,
}

impl ClientContext {
    /// Builds the context from header-derived values.
    ///
    /// # Arguments
    ///
    /// - `geo` - raw geolocation from proxy headers
    /// - `ip` - client IP from proxy headers, if any
    /// - `local_host` - whether the request targets a loopback/dev host
    /// - `country_override` - manual-testing override; callers pass it only
    ///   when the override is allowed. Must be two ASCII letters, anything
    ///   else is ignored.
    pub fn derive(
        geo: &GeoLocation,
        ip: Option<String>,
        local_host: bool,
        country_override: Option<&str>,
    ) -> Self {
        let fallback = |local: &str| {
            if local_host {
                local.to_string()
            } else {
                UNKNOWN.to_string()
            }
        };

        let country = country_override
            .and_then(normalize_country_override)
            .or_else(|| geo.country.clone())
            .unwrap_or_else(|| fallback(LOCAL_COUNTRY));

        let city = geo.city.clone().unwrap_or_else(|| fallback(LOCAL_CITY));

        let continent = if country == UNKNOWN {
            fallback(LOCAL_CONTINENT)
        } else {
            continent_for(&country)
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN.to_string())
        };

        Self {
            ip,
            country,
            city,
            continent,
        }
    }
}

fn normalize_country_override(value: &str) -> Option<String> {
    let value = value.trim();
    (value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic()))
        .then(|| value.to_ascii_uppercase())
}
