//! Client context derivation for a single request.

use crate::domain::entities::{ClientContext, IncomingRequest};
use crate::utils::client_ip::extract_client_ip;
use crate::utils::geo_headers::extract_geo;

/// Query parameter that overrides the derived country for manual testing.
pub const COUNTRY_OVERRIDE_PARAM: &str = "country";

/// Derives the [`ClientContext`] the resolver receives.
///
/// The [`COUNTRY_OVERRIDE_PARAM`] query parameter is honored only when the
/// request targets a local host or the gateway is not in production mode.
pub fn derive_client_context(request: &IncomingRequest<'_>, production: bool) -> ClientContext {
    let local_host = request.is_local_host();
    let geo = extract_geo(request.headers);
    let ip = extract_client_ip(request.headers);

    let country_override = if local_host || !production {
        request.query_param(COUNTRY_OVERRIDE_PARAM)
    } else {
        None
    };

    ClientContext::derive(&geo, ip, local_host, country_override.as_deref())
}
