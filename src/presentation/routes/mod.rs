// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::crawl_provider::CrawlProvider;
use crate::domain::services::ingest_service::IngestService;
use crate::presentation::handlers::{crawl_handler, health_handler, webhook_handler};
use crate::presentation::middleware::cors::cors_layer;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 处理器依赖通过 `Extension` 注入，见 [`app`]
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<P, I>() -> Router
where
    P: CrawlProvider + 'static,
    I: IngestService + 'static,
{
    let public_routes = Router::new()
        .route("/test", get(health_handler::test))
        .route("/health", get(health_handler::health_check))
        .route("/version", get(health_handler::version));

    let relay_routes = Router::new()
        .route("/crawl", post(crawl_handler::create_crawl::<P>))
        .route("/crawl/{crawl_id}", get(crawl_handler::get_crawl_status::<P>))
        .route("/webhook/crawl", post(webhook_handler::crawl_webhook::<I>));

    Router::new().merge(public_routes).merge(relay_routes)
}

/// 组装完整应用：路由、依赖注入、CORS 和请求追踪
pub fn app<P, I>(provider: Arc<P>, ingest: Arc<I>) -> Router
where
    P: CrawlProvider + 'static,
    I: IngestService + 'static,
{
    routes::<P, I>()
        .layer(Extension(provider))
        .layer(Extension(ingest))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
