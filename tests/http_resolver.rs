mod common;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use shortlink_gateway::domain::entities::{ClientContext, LinkLookup};
use shortlink_gateway::domain::resolvers::{LinkResolver, ResolveError};
use shortlink_gateway::infrastructure::HttpLinkResolver;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::{Url, form_urlencoded};

type Seen = Arc<Mutex<Vec<(HashMap<String, String>, HeaderMap)>>>;

async fn link_endpoint(
    State(seen): State<Seen>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let params: HashMap<String, String> =
        form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
            .into_owned()
            .collect();
    let alias = params.get("alias").cloned().unwrap_or_default();
    seen.lock().unwrap().push((params, headers));

    match alias.as_str() {
        "found" => Json(json!({
            "url": "https://example.com/landing",
            "cloaking": false,
            "clicks": 42
        }))
        .into_response(),
        "hidden" => Json(json!({ "url": "https://example.com", "cloaking": true })).into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "html" => "<html>not json</html>".into_response(),
        _ => Json(json!({})).into_response(),
    }
}

async fn spawn_resolver() -> (Url, Seen) {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route("/api/link", get(link_endpoint))
        .with_state(seen.clone());
    let addr = common::spawn_server(router).await;
    (Url::parse(&format!("http://{addr}")).unwrap(), seen)
}

fn lookup(base_url: Url, alias: &str, ip: Option<&str>) -> LinkLookup {
    LinkLookup {
        base_url,
        domain: "sho.rt".to_string(),
        alias: alias.to_string(),
        context: ClientContext {
            ip: ip.map(str::to_string),
            country: "US".to_string(),
            city: "San Francisco".to_string(),
            continent: "NA".to_string(),
        },
        user_agent: "Mozilla/5.0".to_string(),
        referer: String::new(),
    }
}

#[tokio::test]
async fn test_resolve_found() {
    let (base, seen) = spawn_resolver().await;
    let resolver = HttpLinkResolver::new(common::reqwest_client());

    let result = resolver
        .resolve(&lookup(base, "found", Some("203.0.113.7")))
        .await
        .unwrap();

    assert_eq!(result.url.as_deref(), Some("https://example.com/landing"));
    assert!(!result.is_cloaked());

    let seen = seen.lock().unwrap();
    let (params, headers) = &seen[0];
    assert_eq!(params["domain"], "sho.rt");
    assert_eq!(params["alias"], "found");
    assert_eq!(params["country"], "US");
    assert_eq!(params["city"], "San Francisco");
    assert_eq!(params["continent"], "NA");
    assert_eq!(params["ip"], "203.0.113.7");
    assert_eq!(headers["user-agent"], "Mozilla/5.0");
    assert_eq!(headers["referer"], "");
}

#[tokio::test]
async fn test_resolve_cloaked() {
    let (base, _seen) = spawn_resolver().await;
    let resolver = HttpLinkResolver::new(common::reqwest_client());

    let result = resolver.resolve(&lookup(base, "hidden", None)).await.unwrap();

    assert!(result.is_cloaked());
}

#[tokio::test]
async fn test_unknown_ip_sent_empty() {
    let (base, seen) = spawn_resolver().await;
    let resolver = HttpLinkResolver::new(common::reqwest_client());

    let result = resolver.resolve(&lookup(base, "missing", None)).await.unwrap();

    assert!(result.url.is_none());
    assert_eq!(seen.lock().unwrap()[0].0["ip"], "");
}

#[tokio::test]
async fn test_error_status() {
    let (base, _seen) = spawn_resolver().await;
    let resolver = HttpLinkResolver::new(common::reqwest_client());

    let err = resolver.resolve(&lookup(base, "broken", None)).await.unwrap_err();

    assert!(matches!(err, ResolveError::Status(500)));
}

#[tokio::test]
async fn test_non_json_body() {
    let (base, _seen) = spawn_resolver().await;
    let resolver = HttpLinkResolver::new(common::reqwest_client());

    let err = resolver.resolve(&lookup(base, "html", None)).await.unwrap_err();

    assert!(matches!(err, ResolveError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_resolver() {
    let base = common::unreachable_url().await;
    let resolver = HttpLinkResolver::new(common::reqwest_client());

    let err = resolver.resolve(&lookup(base, "found", None)).await.unwrap_err();

    assert!(matches!(err, ResolveError::Transport(_)));
}
