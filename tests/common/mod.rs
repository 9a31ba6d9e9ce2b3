#![allow(dead_code)]

use std::net::SocketAddr;

use anyhow::Result;
use catalog_info_api::config::{AppConfig, OpenShiftConfig, ServerConfig};
use catalog_info_api::server;
use wiremock::MockServer;

/// Bearer token the proxy is configured with in every test.
pub const TEST_TOKEN: &str = "sha256~integration-test-token";

/// A running proxy instance on an ephemeral port, wired to a wiremock
/// upstream standing in for the OpenShift API server.
pub struct TestApp {
    pub base_url: String,
    pub upstream: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        let upstream = MockServer::start().await;
        let base_url = spawn_proxy(&upstream.uri()).await?;

        Ok(Self {
            base_url,
            upstream,
            client: reqwest::Client::new(),
        })
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?)
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?)
    }
}

/// Start the real router against `upstream_url` on an ephemeral port and
/// return the proxy's base URL. Used directly by tests that need a dead or
/// otherwise unusual upstream.
pub async fn spawn_proxy(upstream_url: &str) -> Result<String> {
    let config = AppConfig {
        server: ServerConfig { port: 0 },
        openshift: OpenShiftConfig {
            base_url: upstream_url.trim_end_matches('/').to_string(),
            auth_token: TEST_TOKEN.to_string(),
        },
    };

    let router = server::app(&config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        server::serve(listener, router).await.expect("test server");
    });

    Ok(format!("http://{}", addr))
}
