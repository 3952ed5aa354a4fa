// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crawl_relay::config::settings::Settings;
use crawl_relay::infrastructure::metrics;
use crawl_relay::infrastructure::services::firecrawl_client::FirecrawlClient;
use crawl_relay::infrastructure::services::http_client::build_http_client;
use crawl_relay::infrastructure::services::ingest_client::HttpIngestClient;
use crawl_relay::presentation::routes;
use crawl_relay::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting crawl-relay...");

    // 3. Load configuration
    let settings = Settings::new()?;
    for var in settings.missing_upstream_vars() {
        warn!("{} is not set; requests that need it will fail", var);
    }
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics)?;

    // 4. Initialize upstream clients
    let http_client = build_http_client()?;
    let provider = Arc::new(FirecrawlClient::new(http_client.clone(), &settings.firecrawl));
    let ingest = Arc::new(HttpIngestClient::new(http_client, &settings.ingest));

    // 5. Start HTTP server
    let app = routes::app(provider, ingest);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
