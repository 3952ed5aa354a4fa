// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::errors::RelayError;

/// 默认最大爬取深度
pub const DEFAULT_MAX_DEPTH: u32 = 2;
/// 默认页面数量上限
pub const DEFAULT_LIMIT: u32 = 50;

/// 爬取请求
///
/// 客户端提交的爬取参数，`project_name` 会作为课程名写入 Webhook 元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    /// 起始URL
    pub url: String,
    /// 最大爬取深度，缺省为 [`DEFAULT_MAX_DEPTH`]
    pub max_depth: Option<u32>,
    /// 页面数量上限，缺省为 [`DEFAULT_LIMIT`]
    pub limit: Option<u32>,
    /// 项目名称
    pub project_name: String,
}

/// Webhook 元数据
///
/// 提交爬取时随 Webhook 注册，Firecrawl 在每次回调中原样返回。
/// 其他任务注册的元数据可能没有 `course_name`，此时为空字符串。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlMetadata {
    #[serde(default)]
    pub course_name: String,
}

/// Webhook 回调目标
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookTarget {
    pub url: String,
    pub metadata: CrawlMetadata,
}

/// 发往 Firecrawl `/v1/crawl` 的爬取任务负载
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlJob {
    pub url: String,
    pub max_depth: u32,
    pub limit: u32,
    pub webhook: WebhookTarget,
}

impl CrawlJob {
    /// 由爬取请求和回调地址构造任务负载，填充默认深度和数量上限
    pub fn new(request: &CrawlRequest, webhook_url: &str) -> Self {
        Self {
            url: request.url.clone(),
            max_depth: request.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            limit: request.limit.unwrap_or(DEFAULT_LIMIT),
            webhook: WebhookTarget {
                url: webhook_url.to_string(),
                metadata: CrawlMetadata {
                    course_name: request.project_name.clone(),
                },
            },
        }
    }
}

/// 爬取创建响应
///
/// 规范化的 `crawlId` 加上 Firecrawl 返回的全部字段
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlResponse {
    pub crawl_id: String,
    /// Firecrawl 原始响应体
    pub provider: Map<String, Value>,
}

impl CrawlResponse {
    /// 从 Firecrawl 响应体构造
    ///
    /// 响应体必须是包含字符串 `id` 的 JSON 对象
    pub fn from_provider(body: Value) -> Result<Self, RelayError> {
        let Value::Object(provider) = body else {
            return Err(RelayError::Decode(
                "expected a JSON object from Firecrawl".to_string(),
            ));
        };

        let crawl_id = provider
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                RelayError::Decode("Firecrawl response is missing the job `id`".to_string())
            })?;

        Ok(Self { crawl_id, provider })
    }
}
