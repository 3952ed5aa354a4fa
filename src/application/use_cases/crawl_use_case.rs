// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::dto::crawl_request::CrawlRequestDto,
    domain::{
        models::crawl::{CrawlRequest, CrawlResponse},
        services::crawl_provider::CrawlProvider,
    },
    utils::errors::RelayError,
};
use metrics::counter;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// 爬取用例
///
/// 校验客户端请求并转发给爬取服务提供方
pub struct CrawlUseCase<P> {
    provider: Arc<P>,
}

impl<P> CrawlUseCase<P>
where
    P: CrawlProvider + 'static,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// 创建爬取任务
    pub async fn create_crawl(&self, payload: CrawlRequestDto) -> Result<CrawlResponse, RelayError> {
        payload
            .validate()
            .map_err(|e| RelayError::InvalidPayload(e.to_string()))?;

        let request = CrawlRequest::from(payload);
        let response = self.provider.submit_crawl(&request).await.inspect_err(|e| {
            warn!(url = %request.url, project = %request.project_name, "Crawl submission failed: {}", e);
        })?;

        counter!("relay_crawls_started_total").increment(1);
        info!(
            crawl_id = %response.crawl_id,
            project = %request.project_name,
            "Crawl started"
        );
        Ok(response)
    }

    /// 查询爬取任务状态
    pub async fn get_crawl_status(&self, crawl_id: &str) -> Result<Value, RelayError> {
        let status = self.provider.crawl_status(crawl_id).await?;
        info!(crawl_id, "Retrieved crawl status");
        Ok(status)
    }
}
