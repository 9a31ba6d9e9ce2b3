mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn upstream_404_maps_to_500_with_upstream_status() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    Mock::given(method("GET"))
        .and(path(
            "/apis/template.openshift.io/v1/namespaces/ns1/templates/gone",
        ))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.upstream)
        .await;

    let res = app.get("/templates/ns1/gone").await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert_eq!(body["upstreamStatus"], 404);
    Ok(())
}

#[tokio::test]
async fn upstream_body_is_not_relayed_on_failure() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    Mock::given(method("GET"))
        .and(path("/apis/template.openshift.io/v1/templates"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "kind": "Status", "code": 503 })),
        )
        .mount(&app.upstream)
        .await;

    let res = app.get("/templates").await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    // The translated error, not the upstream Status object
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert_eq!(body["upstreamStatus"], 503);
    assert!(body.get("kind").is_none());
    Ok(())
}

#[tokio::test]
async fn unreachable_upstream_maps_to_500_transport_error() -> Result<()> {
    // Bind and immediately drop a listener so the port is very likely dead.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let dead_addr = listener.local_addr()?;
    drop(listener);

    let proxy_url = common::spawn_proxy(&format!("http://{}", dead_addr)).await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/templates", proxy_url)).send().await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "TRANSPORT_ERROR");
    assert!(body.get("upstreamStatus").is_none());
    Ok(())
}

#[tokio::test]
async fn failed_create_maps_to_500() -> Result<()> {
    let app = common::TestApp::spawn().await?;

    Mock::given(method("POST"))
        .and(path("/api/v1/namespaces/default/secrets"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&app.upstream)
        .await;

    let res = app
        .post_json("/secrets/default", &json!({ "stringData": {} }))
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert_eq!(body["upstreamStatus"], 409);
    Ok(())
}
