//! Short-link decision pipeline.

use axum::http::header;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::application::services::context_extractor::derive_client_context;
use crate::application::services::dispatcher::dispatch;
use crate::domain::eligibility::{Eligibility, classify};
use crate::domain::entities::{IncomingRequest, LinkLookup, RedirectDecision};
use crate::domain::resolvers::LinkResolver;
use crate::utils::bot_agent::is_bot;

/// Where and how the resolver is reached.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Production mode: resolver calls go to `internal_base_url` instead of
    /// the request origin, and the country override is limited to local hosts.
    pub production: bool,
    /// Plain-HTTP origin the service reaches itself at behind the
    /// TLS-terminating proxy.
    pub internal_base_url: Url,
}

/// Decides what happens to each inbound request.
///
/// Stateless between requests: the only I/O is one resolver call per
/// eligible request, and every failure along the way yields
/// [`RedirectDecision::Continue`].
pub struct RedirectService {
    resolver: Arc<dyn LinkResolver>,
    settings: ResolverSettings,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(resolver: Arc<dyn LinkResolver>, settings: ResolverSettings) -> Self {
        Self { resolver, settings }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Base URL for the resolver call: the internal origin in production,
    /// the request origin otherwise.
    pub fn resolver_base(&self, request: &IncomingRequest<'_>) -> Option<Url> {
        if self.settings.production {
            Some(self.settings.internal_base_url.clone())
        } else {
            request.origin()
        }
    }

    /// Runs the full pipeline for one request.
    ///
    /// # Request Flow
    ///
    /// 1. Classify the path; only single-segment candidates continue
    /// 2. Known crawlers are passed through without a lookup
    /// 3. Derive client IP and geolocation from proxy headers
    /// 4. Call the resolver once
    /// 5. Validate the target and pick redirect, rewrite or pass-through
    pub async fn decide(&self, request: &IncomingRequest<'_>) -> RedirectDecision {
        let decision = self.evaluate(request).await;
        metrics::counter!("gateway_decisions_total", "decision" => decision.label()).increment(1);
        decision
    }

    async fn evaluate(&self, request: &IncomingRequest<'_>) -> RedirectDecision {
        let alias = match classify(request.path()) {
            Eligibility::Candidate(alias) => alias,
            other => {
                debug!(path = request.path(), eligibility = ?other, "Not a short-link path");
                return RedirectDecision::Continue;
            }
        };

        let user_agent = request.header_or_empty(header::USER_AGENT);
        if is_bot(&user_agent) {
            debug!(alias = %alias, user_agent = %user_agent, "Crawler request, skipping resolution");
            return RedirectDecision::Continue;
        }

        let (Some(host), Some(request_url), Some(base_url)) = (
            request.host.as_ref(),
            request.url(),
            self.resolver_base(request),
        ) else {
            debug!(alias = %alias, "Request has no usable host, skipping resolution");
            return RedirectDecision::Continue;
        };

        let lookup = LinkLookup {
            base_url,
            domain: host.hostname.clone(),
            alias,
            context: derive_client_context(request, self.settings.production),
            user_agent,
            referer: request.header_or_empty(header::REFERER),
        };

        match self.resolver.resolve(&lookup).await {
            Ok(result) => {
                let decision = dispatch(&result, &request_url);
                debug!(
                    domain = %lookup.domain,
                    alias = %lookup.alias,
                    decision = decision.label(),
                    "Short link resolved"
                );
                decision
            }
            Err(e) => {
                metrics::counter!("gateway_resolver_failures_total").increment(1);
                warn!(
                    domain = %lookup.domain,
                    alias = %lookup.alias,
                    error = %e,
                    "Link resolver unavailable, passing request through"
                );
                RedirectDecision::Continue
            }
        }
    }
}
