#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Json, Router,
    body::to_bytes,
    extract::Request,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Map, Value, json};
use shortlink_gateway::api::middleware::dashboard_guard::{RouteGuard, SessionCookieGuard};
use shortlink_gateway::application::services::{RedirectService, ResolverSettings};
use shortlink_gateway::config::RunMode;
use shortlink_gateway::domain::entities::{LinkLookup, ResolutionResult};
use shortlink_gateway::domain::resolvers::{LinkResolver, ResolveError};
use shortlink_gateway::infrastructure::UpstreamProxy;
use shortlink_gateway::state::AppState;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use url::Url;

pub const INTERNAL_BASE: &str = "http://internal.test:3000";

/// In-memory resolver that records every lookup it receives.
#[derive(Default)]
pub struct StaticResolver {
    links: HashMap<String, ResolutionResult>,
    fail_with_status: Option<u16>,
    lookups: Mutex<Vec<LinkLookup>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(mut self, alias: &str, url: &str) -> Self {
        self.links.insert(
            alias.to_string(),
            ResolutionResult {
                url: Some(url.to_string()),
                cloaking: None,
            },
        );
        self
    }

    pub fn with_cloaked_link(mut self, alias: &str, url: &str) -> Self {
        self.links.insert(
            alias.to_string(),
            ResolutionResult {
                url: Some(url.to_string()),
                cloaking: Some(true),
            },
        );
        self
    }

    /// Every lookup fails as if the resolver answered `status`.
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<LinkLookup> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl LinkResolver for StaticResolver {
    async fn resolve(&self, lookup: &LinkLookup) -> Result<ResolutionResult, ResolveError> {
        self.lookups.lock().unwrap().push(lookup.clone());

        if let Some(status) = self.fail_with_status {
            return Err(ResolveError::Status(status));
        }

        Ok(self.links.get(&lookup.alias).cloned().unwrap_or_default())
    }
}

pub fn cookie_guard() -> Arc<dyn RouteGuard> {
    Arc::new(SessionCookieGuard::new(
        vec![
            "session".to_string(),
            "next-auth.session-token".to_string(),
        ],
        "/api/auth/signin",
    ))
}

pub fn create_state_with(
    resolver: Arc<StaticResolver>,
    upstream: Option<Url>,
    mode: RunMode,
    route_guard: Arc<dyn RouteGuard>,
) -> AppState {
    let redirect_service = Arc::new(RedirectService::new(
        resolver,
        ResolverSettings {
            production: mode.is_production(),
            internal_base_url: Url::parse(INTERNAL_BASE).unwrap(),
        },
    ));

    let upstream =
        upstream.map(|base| Arc::new(UpstreamProxy::new(reqwest_client(), base)));

    AppState::new(redirect_service, route_guard, upstream, mode)
}

/// Development-mode state with the cookie guard.
pub fn create_test_state(resolver: Arc<StaticResolver>, upstream: Option<Url>) -> AppState {
    create_state_with(resolver, upstream, RunMode::Development, cookie_guard())
}

pub fn reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Serves `router` on an ephemeral loopback port.
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Upstream that answers every request with a JSON description of it.
///
/// `GET /moved` answers `302` to `/elsewhere` instead.
pub async fn spawn_echo_upstream() -> Url {
    let router = Router::new()
        .route("/moved", get(moved))
        .fallback(echo);
    let addr = spawn_server(router).await;
    Url::parse(&format!("http://{addr}")).unwrap()
}

async fn moved() -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/elsewhere")],
    )
        .into_response()
}

async fn echo(req: Request) -> Json<Value> {
    let (parts, body) = req.into_parts();

    let mut headers = Map::new();
    for (name, value) in &parts.headers {
        headers
            .entry(name.as_str().to_string())
            .or_insert_with(|| Value::String(value.to_str().unwrap_or_default().to_string()));
    }

    let body = to_bytes(body, usize::MAX).await.unwrap();

    Json(json!({
        "method": parts.method.as_str(),
        "path": parts.uri.path(),
        "query": parts.uri.query(),
        "headers": headers,
        "body": String::from_utf8_lossy(&body),
    }))
}

/// Url that refuses connections: the port was bound and released.
pub async fn unreachable_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}
