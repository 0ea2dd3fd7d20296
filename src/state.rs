//! Shared application state injected into middleware and handlers.

use reqwest::Client;
use std::sync::Arc;

use crate::api::middleware::dashboard_guard::{AllowAllGuard, RouteGuard, SessionCookieGuard};
use crate::application::services::{RedirectService, ResolverSettings};
use crate::config::{Config, DashboardAuth, RunMode};
use crate::domain::resolvers::LinkResolver;
use crate::infrastructure::{HttpLinkResolver, UpstreamProxy};

/// Per-process state. Cheap to clone: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    pub route_guard: Arc<dyn RouteGuard>,
    /// Page renderer for pass-through requests; `None` answers `404`.
    pub upstream: Option<Arc<UpstreamProxy>>,
    pub mode: RunMode,
}

impl AppState {
    pub fn new(
        redirect_service: Arc<RedirectService>,
        route_guard: Arc<dyn RouteGuard>,
        upstream: Option<Arc<UpstreamProxy>>,
        mode: RunMode,
    ) -> Self {
        Self {
            redirect_service,
            route_guard,
            upstream,
            mode,
        }
    }

    /// Wires the production components from `config`, sharing `client`
    /// between the resolver and the upstream proxy.
    pub fn from_config(config: &Config, client: Client) -> Self {
        let resolver: Arc<dyn LinkResolver> = Arc::new(HttpLinkResolver::new(client.clone()));
        let redirect_service = Arc::new(RedirectService::new(
            resolver,
            ResolverSettings {
                production: config.mode.is_production(),
                internal_base_url: config.internal_base_url.clone(),
            },
        ));

        let route_guard: Arc<dyn RouteGuard> = match config.dashboard_auth {
            DashboardAuth::Cookie => Arc::new(SessionCookieGuard::new(
                config.session_cookies.clone(),
                config.sign_in_url.clone(),
            )),
            DashboardAuth::None => Arc::new(AllowAllGuard),
        };

        let upstream = config
            .upstream_url
            .clone()
            .map(|base| Arc::new(UpstreamProxy::new(client, base)));

        Self::new(redirect_service, route_guard, upstream, config.mode)
    }
}
