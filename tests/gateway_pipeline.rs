mod common;

use axum_test::TestServer;
use serde_json::Value;
use shortlink_gateway::config::RunMode;
use shortlink_gateway::routes::app_router;
use std::sync::Arc;

use common::StaticResolver;

#[tokio::test]
async fn test_redirect_success() {
    let resolver = Arc::new(StaticResolver::new().with_link("abc123", "https://example.com/target"));
    let app = app_router(common::create_test_state(resolver.clone(), None));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/abc123").add_header("Host", "sho.rt").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(resolver.lookups().len(), 1);
}

#[tokio::test]
async fn test_trailing_slash_redirects() {
    let resolver = Arc::new(StaticResolver::new().with_link("abc123", "https://example.com"));
    let app = app_router(common::create_test_state(resolver, None));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/abc123/").add_header("Host", "sho.rt").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_lookup_carries_client_context() {
    let resolver = Arc::new(StaticResolver::new());
    let app = app_router(common::create_test_state(resolver.clone(), None));
    let server = TestServer::new(app).unwrap();

    server
        .get("/promo")
        .add_header("Host", "sho.rt")
        .add_header("X-Forwarded-Proto", "https")
        .add_header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
        .add_header("CF-IPCountry", "JP")
        .add_header("CF-IPCity", "T%C5%8Dky%C5%8D")
        .add_header("User-Agent", "Mozilla/5.0")
        .add_header("Referer", "https://news.example/")
        .await;

    let lookups = resolver.lookups();
    assert_eq!(lookups.len(), 1);
    let lookup = &lookups[0];
    assert_eq!(lookup.base_url.as_str(), "https://sho.rt/");
    assert_eq!(lookup.domain, "sho.rt");
    assert_eq!(lookup.alias, "promo");
    assert_eq!(lookup.context.ip.as_deref(), Some("203.0.113.7"));
    assert_eq!(lookup.context.country, "JP");
    assert_eq!(lookup.context.city, "Tōkyō");
    assert_eq!(lookup.context.continent, "AS");
    assert_eq!(lookup.user_agent, "Mozilla/5.0");
    assert_eq!(lookup.referer, "https://news.example/");
}

#[tokio::test]
async fn test_production_resolves_through_internal_base() {
    let resolver = Arc::new(StaticResolver::new());
    let state = common::create_state_with(
        resolver.clone(),
        None,
        RunMode::Production,
        common::cookie_guard(),
    );
    let server = TestServer::new(app_router(state)).unwrap();

    server
        .get("/promo?country=BR")
        .add_header("Host", "sho.rt")
        .add_header("CF-IPCountry", "FR")
        .await;

    let lookup = &resolver.lookups()[0];
    assert_eq!(lookup.base_url.as_str(), "http://internal.test:3000/");
    assert_eq!(lookup.context.country, "FR");
}

#[tokio::test]
async fn test_country_override_in_development() {
    let resolver = Arc::new(StaticResolver::new());
    let app = app_router(common::create_test_state(resolver.clone(), None));
    let server = TestServer::new(app).unwrap();

    server
        .get("/promo?country=br")
        .add_header("Host", "sho.rt")
        .add_header("CF-IPCountry", "FR")
        .await;

    let lookup = &resolver.lookups()[0];
    assert_eq!(lookup.context.country, "BR");
    assert_eq!(lookup.context.continent, "SA");
}

#[tokio::test]
async fn test_reserved_and_static_paths_skip_resolver() {
    let resolver = Arc::new(StaticResolver::new().with_link("logo.png", "https://example.com"));
    let app = app_router(common::create_test_state(resolver.clone(), None));
    let server = TestServer::new(app).unwrap();

    for path in ["/", "/api/health", "/_next/static/app.js", "/logo.png", "/a/b"] {
        server.get(path).add_header("Host", "sho.rt").await;
    }

    assert!(resolver.lookups().is_empty());
}

#[tokio::test]
async fn test_bot_passes_through() {
    let resolver = Arc::new(StaticResolver::new().with_link("abc123", "https://example.com"));
    let upstream = common::spawn_echo_upstream().await;
    let app = app_router(common::create_test_state(resolver.clone(), Some(upstream)));
    let server = TestServer::new(app).unwrap();

    let response = server
        .get("/abc123")
        .add_header("Host", "sho.rt")
        .add_header("User-Agent", "Twitterbot/1.0")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["path"], "/abc123");
    assert!(resolver.lookups().is_empty());
}

#[tokio::test]
async fn test_cloaked_link_rewritten_to_upstream() {
    let resolver = Arc::new(
        StaticResolver::new().with_cloaked_link("hidden", "https://example.com/page?a=1"),
    );
    let upstream = common::spawn_echo_upstream().await;
    let app = app_router(common::create_test_state(resolver, Some(upstream)));
    let server = TestServer::new(app).unwrap();

    let response = server
        .get("/hidden?utm=x")
        .add_header("Host", "sho.rt")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(
        json["path"],
        "/cloaked/https%3A%2F%2Fexample.com%2Fpage%3Fa%3D1"
    );
    assert_eq!(json["query"], Value::Null);
    assert_eq!(json["headers"]["x-forwarded-host"], "sho.rt");
}

#[tokio::test]
async fn test_unknown_alias_passes_through() {
    let resolver = Arc::new(StaticResolver::new());
    let upstream = common::spawn_echo_upstream().await;
    let app = app_router(common::create_test_state(resolver.clone(), Some(upstream)));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/pricing").add_header("Host", "sho.rt").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["path"], "/pricing");
    assert_eq!(resolver.lookups().len(), 1);
}

#[tokio::test]
async fn test_resolver_failure_passes_through() {
    let resolver = Arc::new(StaticResolver::failing(500));
    let upstream = common::spawn_echo_upstream().await;
    let app = app_router(common::create_test_state(resolver, Some(upstream)));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/abc123").add_header("Host", "sho.rt").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["path"], "/abc123");
}

#[tokio::test]
async fn test_unsafe_target_never_redirects() {
    let resolver = Arc::new(StaticResolver::new().with_link("evil", "javascript:alert(1)"));
    let app = app_router(common::create_test_state(resolver, None));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/evil").add_header("Host", "sho.rt").await;

    assert_eq!(response.status_code(), 404);
    assert!(response.maybe_header("location").is_none());
}

#[tokio::test]
async fn test_pass_through_without_upstream_is_not_found() {
    let resolver = Arc::new(StaticResolver::new());
    let app = app_router(common::create_test_state(resolver, None));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/nothing-here").add_header("Host", "sho.rt").await;

    assert_eq!(response.status_code(), 404);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/nothing-here");
}
