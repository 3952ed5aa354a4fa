// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_server, unreachable_url, Upstreams, BEAM_API_KEY};
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(n: usize) -> Value {
    json!({
        "markdown": format!("# Lecture {}", n),
        "metadata": {
            "sourceURL": format!("https://x.com/lecture/{}", n),
            "ogUrl": "https://x.com",
            "title": format!("Lecture {}", n),
            "statusCode": 200
        }
    })
}

fn webhook(event_type: &str, pages: usize) -> Value {
    json!({
        "success": true,
        "type": event_type,
        "id": "abc123",
        "data": (1..=pages).map(page).collect::<Vec<_>>(),
        "metadata": { "course_name": "cs101" }
    })
}

async fn ingested_urls(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| {
            let body: Value = request.body_json().unwrap();
            body["url"].as_str().unwrap().to_string()
        })
        .collect()
}

/// Webhook 中继测试
///
/// 两个页面触发两次摄取请求，顺序与负载一致
#[tokio::test]
async fn test_crawl_page_relays_each_page_in_order() {
    let ingest = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .and(header("authorization", format!("Bearer {}", BEAM_API_KEY).as_str()))
        .and(body_partial_json(json!({
            "course_name": "cs101",
            "groups": ["firecrawl"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&ingest)
        .await;

    let server = create_test_server(Upstreams::ingest(format!("{}/ingest", ingest.uri())));
    let response = server.post("/webhook/crawl").json(&webhook("crawl.page", 2)).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true }));
    assert_eq!(
        ingested_urls(&ingest).await,
        vec!["https://x.com/lecture/1", "https://x.com/lecture/2"]
    );

    let first: Value = ingest.received_requests().await.unwrap()[0].body_json().unwrap();
    assert_eq!(
        first,
        json!({
            "url": "https://x.com/lecture/1",
            "base_url": "https://x.com",
            "content": "# Lecture 1",
            "readable_filename": "Lecture 1",
            "course_name": "cs101",
            "groups": ["firecrawl"]
        })
    );
}

#[tokio::test]
async fn test_other_event_types_are_acknowledged() {
    let ingest = MockServer::start().await;
    let server = create_test_server(Upstreams::ingest(format!("{}/ingest", ingest.uri())));

    for event_type in ["crawl.started", "crawl.completed", "crawl.failed"] {
        let response = server
            .post("/webhook/crawl")
            .json(&webhook(event_type, 2))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true }));
    }

    assert!(ingest.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_page_does_not_stop_remaining_pages() {
    let ingest = MockServer::start().await;
    for (n, status) in [(1, 200u16), (2, 503), (3, 200)] {
        Mock::given(method("POST"))
            .and(path("/ingest"))
            .and(body_partial_json(json!({
                "url": format!("https://x.com/lecture/{}", n)
            })))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&ingest)
            .await;
    }

    let server = create_test_server(Upstreams::ingest(format!("{}/ingest", ingest.uri())));
    let response = server.post("/webhook/crawl").json(&webhook("crawl.page", 3)).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true }));
    assert_eq!(
        ingested_urls(&ingest).await,
        vec![
            "https://x.com/lecture/1",
            "https://x.com/lecture/2",
            "https://x.com/lecture/3"
        ]
    );
}

#[tokio::test]
async fn test_events_without_usable_metadata_are_acknowledged() {
    let ingest = MockServer::start().await;
    let server = create_test_server(Upstreams::ingest(format!("{}/ingest", ingest.uri())));

    for body in [
        json!({ "type": "crawl.completed", "id": "abc123", "metadata": {} }),
        json!({ "success": true, "id": "abc123" }),
    ] {
        let response = server.post("/webhook/crawl").json(&body).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true }));
    }

    assert!(ingest.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_page_event_without_course_name_returns_500() {
    let ingest = MockServer::start().await;
    let server = create_test_server(Upstreams::ingest(format!("{}/ingest", ingest.uri())));

    let response = server
        .post("/webhook/crawl")
        .json(&json!({ "type": "crawl.page", "id": "abc123", "data": [page(1)] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Webhook processing failed");
    assert_eq!(body["message"], "webhook metadata is missing course_name");
    assert!(ingest.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_ingest_endpoint_returns_500() {
    let server = create_test_server(Upstreams::ingest(unreachable_url()));

    let response = server.post("/webhook/crawl").json(&webhook("crawl.page", 1)).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Webhook processing failed");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_missing_ingest_url_returns_500() {
    let server = create_test_server(Upstreams::default());

    let response = server.post("/webhook/crawl").json(&webhook("crawl.page", 1)).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "INGEST_URL environment variable is not defined"
    );
}
