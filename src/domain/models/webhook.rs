// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::crawl::CrawlMetadata;

/// Webhook事件类型
///
/// Firecrawl 推送的事件种类，只有 `crawl.page` 会触发摄取
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebhookEventType {
    /// 爬取开始
    CrawlStarted,
    /// 单个页面爬取完成
    CrawlPage,
    /// 整个爬取完成
    CrawlCompleted,
    /// 爬取失败
    CrawlFailed,
    /// 其他未识别的事件类型
    Other(String),
}

impl WebhookEventType {
    pub fn as_str(&self) -> &str {
        match self {
            WebhookEventType::CrawlStarted => "crawl.started",
            WebhookEventType::CrawlPage => "crawl.page",
            WebhookEventType::CrawlCompleted => "crawl.completed",
            WebhookEventType::CrawlFailed => "crawl.failed",
            WebhookEventType::Other(other) => other,
        }
    }
}

impl Default for WebhookEventType {
    fn default() -> Self {
        WebhookEventType::Other(String::new())
    }
}

impl From<String> for WebhookEventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "crawl.started" => WebhookEventType::CrawlStarted,
            "crawl.page" => WebhookEventType::CrawlPage,
            "crawl.completed" => WebhookEventType::CrawlCompleted,
            "crawl.failed" => WebhookEventType::CrawlFailed,
            _ => WebhookEventType::Other(value),
        }
    }
}

impl From<WebhookEventType> for String {
    fn from(value: WebhookEventType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Webhook负载
///
/// Firecrawl 在爬取过程中推送的通知。所有字段都可能缺失，
/// 缺少 `type` 的通知按未识别事件处理。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "type", default)]
    pub event_type: WebhookEventType,
    /// 爬取任务ID
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub data: Vec<CrawledPage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 提交爬取时注册的元数据
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CrawlMetadata>,
}

/// 已爬取的页面
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawledPage {
    #[serde(default)]
    pub markdown: String,
    #[serde(default)]
    pub metadata: PageMetadata,
}

/// 页面元数据，仅保留摄取需要的字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(rename = "sourceURL", default)]
    pub source_url: Option<String>,
    #[serde(rename = "ogUrl", default)]
    pub og_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
