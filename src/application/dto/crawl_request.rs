// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::crawl::CrawlRequest;

/// 创建爬取任务的请求体
///
/// `url` 原样交给 Firecrawl，由其负责规范化，这里只检查非空
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CrawlRequestDto {
    /// 起始URL
    #[validate(length(min = 1, message = "url cannot be empty"))]
    pub url: String,
    /// 最大爬取深度，同时接受 `max_depth`
    #[serde(rename = "maxDepth", alias = "max_depth", default)]
    pub max_depth: Option<u32>,
    /// 页面数量上限
    #[serde(default)]
    pub limit: Option<u32>,
    /// 项目名称，作为课程名写入 Webhook 元数据
    #[validate(length(min = 1, message = "project_name cannot be empty"))]
    pub project_name: String,
}

impl From<CrawlRequestDto> for CrawlRequest {
    fn from(dto: CrawlRequestDto) -> Self {
        Self {
            url: dto.url,
            max_depth: dto.max_depth,
            limit: dto.limit,
            project_name: dto.project_name,
        }
    }
}
