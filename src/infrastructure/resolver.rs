//! HTTP implementation of [`LinkResolver`].

use async_trait::async_trait;
use axum::http::header;
use reqwest::Client;

use crate::domain::entities::{LinkLookup, ResolutionResult};
use crate::domain::resolvers::{LinkResolver, ResolveError};

/// Path of the resolution endpoint, relative to the lookup's base URL.
pub const RESOLVE_PATH: &str = "/api/link";

/// Calls the link resolution service over HTTP.
///
/// # Request
///
/// ```text
/// GET <base>/api/link?domain=&alias=&country=&city=&continent=&ip=
/// User-Agent: <caller's user agent>
/// Referer: <caller's referer>
/// ```
///
/// An unknown client IP is sent as an empty `ip` parameter.
#[derive(Clone)]
pub struct HttpLinkResolver {
    client: Client,
}

impl HttpLinkResolver {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Builds the full resolver URL for `lookup`.
pub fn lookup_url(lookup: &LinkLookup) -> Result<url::Url, ResolveError> {
    let mut url = lookup.base_url.join(RESOLVE_PATH)?;
    url.query_pairs_mut()
        .append_pair("domain", &lookup.domain)
        .append_pair("alias", &lookup.alias)
        .append_pair("country", &lookup.context.country)
        .append_pair("city", &lookup.context.city)
        .append_pair("continent", &lookup.context.continent)
        .append_pair("ip", lookup.context.ip.as_deref().unwrap_or_default());
    Ok(url)
}

#[async_trait]
impl LinkResolver for HttpLinkResolver {
    async fn resolve(&self, lookup: &LinkLookup) -> Result<ResolutionResult, ResolveError> {
        let url = lookup_url(lookup)?;

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, lookup.user_agent.as_str())
            .header(header::REFERER, lookup.referer.as_str())
            .send()
            .await
            .map_err(|e| ResolveError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status(status.as_u16()));
        }

        response
            .json::<ResolutionResult>()
            .await
            .map_err(|e| ResolveError::Decode(e.to_string()))
    }
}
