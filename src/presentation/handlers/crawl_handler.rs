// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    application::{dto::crawl_request::CrawlRequestDto, use_cases::crawl_use_case::CrawlUseCase},
    domain::services::crawl_provider::CrawlProvider,
    presentation::errors::AppError,
    utils::errors::RelayError,
};

/// 创建新的爬取任务
///
/// 成功时只返回 `{crawlId}`
pub async fn create_crawl<P>(
    Extension(provider): Extension<Arc<P>>,
    payload: Result<Json<CrawlRequestDto>, JsonRejection>,
) -> Result<Json<Value>, AppError>
where
    P: CrawlProvider + 'static,
{
    let Json(payload) =
        payload.map_err(|e| AppError::crawl(RelayError::InvalidPayload(e.body_text())))?;

    let use_case = CrawlUseCase::new(provider);
    let response = use_case.create_crawl(payload).await.map_err(AppError::crawl)?;
    Ok(Json(json!({ "crawlId": response.crawl_id })))
}

/// 查询爬取任务状态
pub async fn get_crawl_status<P>(
    Extension(provider): Extension<Arc<P>>,
    Path(crawl_id): Path<String>,
) -> Result<Json<Value>, AppError>
where
    P: CrawlProvider + 'static,
{
    let use_case = CrawlUseCase::new(provider);
    let status = use_case
        .get_crawl_status(&crawl_id)
        .await
        .map_err(AppError::crawl_status)?;
    Ok(Json(status))
}
