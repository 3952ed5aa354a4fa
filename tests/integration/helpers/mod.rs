// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use axum_test::TestServer;
use crawl_relay::config::settings::{FirecrawlSettings, IngestSettings};
use crawl_relay::infrastructure::services::firecrawl_client::FirecrawlClient;
use crawl_relay::infrastructure::services::ingest_client::HttpIngestClient;
use crawl_relay::presentation::routes;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const WEBHOOK_URL: &str = "https://relay.example.com/webhook/crawl";
pub const BEAM_API_KEY: &str = "beam-test-key";

/// 上游地址配置，`None` 表示对应环境变量未设置
#[derive(Default)]
pub struct Upstreams {
    pub firecrawl_url: Option<String>,
    pub webhook_url: Option<String>,
    pub ingest_url: Option<String>,
}

impl Upstreams {
    pub fn firecrawl(firecrawl_url: String) -> Self {
        Self {
            firecrawl_url: Some(firecrawl_url),
            webhook_url: Some(WEBHOOK_URL.to_string()),
            ingest_url: None,
        }
    }

    pub fn ingest(ingest_url: String) -> Self {
        Self {
            ingest_url: Some(ingest_url),
            ..Self::default()
        }
    }
}

pub fn create_test_app(upstreams: Upstreams) -> Router {
    let http_client = reqwest::Client::new();
    let provider = FirecrawlClient::new(
        http_client.clone(),
        &FirecrawlSettings {
            api_url: upstreams.firecrawl_url,
            api_key: None,
            webhook_url: upstreams.webhook_url,
        },
    );
    let ingest = HttpIngestClient::new(
        http_client,
        &IngestSettings {
            url: upstreams.ingest_url,
            api_key: Some(BEAM_API_KEY.to_string()),
        },
    );

    routes::app(Arc::new(provider), Arc::new(ingest))
}

pub fn create_test_server(upstreams: Upstreams) -> TestServer {
    TestServer::new(create_test_app(upstreams)).unwrap()
}

/// 发送单个请求并把响应体解析为 JSON
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 返回一个当前没有监听者的本地地址
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/ingest", addr)
}
