//! Header and URL helpers used by the short-link pipeline.
//!
//! - [`request_host`] - Host extraction and local-host detection
//! - [`client_ip`] - Client IP from proxy headers
//! - [`geo_headers`] - Geolocation from CDN / GeoIP headers
//! - [`bot_agent`] - Crawler detection
//! - [`target_url`] - Redirect target validation and encoding

pub mod bot_agent;
pub mod client_ip;
pub mod geo_headers;
pub mod request_host;
pub mod target_url;
