mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use shortlink_gateway::api::handlers::health_handler;
use shortlink_gateway::config::RunMode;
use std::sync::Arc;

use common::StaticResolver;

#[tokio::test]
async fn test_health_endpoint_development() {
    let state = common::create_test_state(Arc::new(StaticResolver::new()), None);
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["mode"], "development");
    assert_eq!(json["checks"]["resolver"]["status"], "ok");
    assert_eq!(json["checks"]["upstream"]["status"], "disabled");
}

#[tokio::test]
async fn test_health_endpoint_production_with_upstream() {
    let upstream = url::Url::parse("http://renderer.test:3001").unwrap();
    let state = common::create_state_with(
        Arc::new(StaticResolver::new()),
        Some(upstream),
        RunMode::Production,
        common::cookie_guard(),
    );
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let json = server.get("/api/health").await.json::<Value>();

    assert_eq!(json["mode"], "production");
    assert_eq!(
        json["checks"]["resolver"]["message"],
        "Internal base: http://internal.test:3000/"
    );
    assert_eq!(json["checks"]["upstream"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_served_through_gateway() {
    let state = common::create_test_state(Arc::new(StaticResolver::new()), None);
    let server = TestServer::new(shortlink_gateway::routes::app_router(state)).unwrap();

    let response = server.get("/api/health").add_header("Host", "sho.rt").await;

    response.assert_status_ok();
}
