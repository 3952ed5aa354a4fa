// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::FirecrawlSettings;
use crate::domain::models::crawl::{CrawlJob, CrawlRequest, CrawlResponse};
use crate::domain::services::crawl_provider::CrawlProvider;
use crate::infrastructure::services::http_client::read_json;
use crate::utils::errors::RelayError;
use async_trait::async_trait;
use metrics::counter;
use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::{error, info, warn};
use url::Url;

/// Firecrawl客户端
///
/// 通过 Firecrawl v1 API 提交爬取任务和查询状态
pub struct FirecrawlClient {
    /// HTTP 客户端
    client: reqwest::Client,
    /// API 基础地址
    api_url: Option<String>,
    /// API 密钥，自托管实例为空
    api_key: Option<String>,
    /// 注册给 Firecrawl 的回调地址
    webhook_url: Option<String>,
}

impl FirecrawlClient {
    pub fn new(client: reqwest::Client, settings: &FirecrawlSettings) -> Self {
        Self {
            client,
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
            webhook_url: settings.webhook_url.clone(),
        }
    }

    /// 在基础地址后拼接路径段，每段都会被百分号编码
    fn endpoint(&self, segments: &[&str]) -> Result<Url, RelayError> {
        let base = self
            .api_url
            .as_deref()
            .ok_or(RelayError::MissingConfig("FIRECRAWL_API_URL"))?;
        let invalid = |reason: String| RelayError::InvalidConfig {
            name: "FIRECRAWL_API_URL",
            reason,
        };

        let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be used as a base URL".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}

#[async_trait]
impl CrawlProvider for FirecrawlClient {
    async fn submit_crawl(&self, request: &CrawlRequest) -> Result<CrawlResponse, RelayError> {
        let endpoint = self.endpoint(&["v1", "crawl"])?;
        let webhook_url = self
            .webhook_url
            .as_deref()
            .ok_or(RelayError::MissingConfig("WEBHOOK_URL"))?;

        let job = CrawlJob::new(request, webhook_url);
        info!(
            endpoint = %endpoint,
            url = %job.url,
            max_depth = job.max_depth,
            limit = job.limit,
            webhook_url,
            "Making Firecrawl API request"
        );

        let response = self
            .authorized(self.client.post(endpoint.clone()))
            .json(&job)
            .send()
            .await
            .inspect_err(|e| {
                error!(endpoint = %endpoint, webhook_url, "Firecrawl request failed: {}", e);
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            counter!("relay_provider_errors_total").increment(1);
            error!(
                status = status.as_u16(),
                status_text = status.canonical_reason().unwrap_or_default(),
                body = %body,
                "Firecrawl API error"
            );
            return Err(RelayError::provider(status));
        }

        CrawlResponse::from_provider(read_json(response).await?)
    }

    async fn crawl_status(&self, crawl_id: &str) -> Result<Value, RelayError> {
        let endpoint = self.endpoint(&["v1", "crawl", crawl_id])?;

        let response = self
            .authorized(self.client.get(endpoint))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies are returned to the caller as-is
            warn!(crawl_id, status = status.as_u16(), "Firecrawl status lookup returned non-success status");
        }

        read_json(response).await
    }
}
