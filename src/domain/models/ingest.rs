// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::webhook::CrawledPage;

/// 摄取请求中固定携带的分组
pub const FIRECRAWL_GROUP: &str = "firecrawl";

/// 摄取请求
///
/// 每个已爬取页面对应一个请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    pub url: Option<String>,
    pub base_url: Option<String>,
    pub content: String,
    pub readable_filename: Option<String>,
    pub course_name: String,
    pub groups: Vec<String>,
}

/// 单个页面的投递结果
///
/// 摄取服务返回非成功状态不视为中继失败，由调用方记录后继续下一个页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// 摄取服务接受了页面
    Accepted,
    /// 摄取服务返回非成功状态
    Rejected { status: u16 },
}

impl IngestRequest {
    /// 由已爬取页面构造摄取请求
    ///
    /// 可读文件名依次取页面标题、`ogUrl`、`sourceURL` 中第一个非空值
    pub fn from_page(page: &CrawledPage, course_name: &str) -> Self {
        let metadata = &page.metadata;
        let readable_filename = [&metadata.title, &metadata.og_url, &metadata.source_url]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty())
            .cloned();

        Self {
            url: metadata.source_url.clone(),
            base_url: metadata.og_url.clone(),
            content: page.markdown.clone(),
            readable_filename,
            course_name: course_name.to_string(),
            groups: vec![FIRECRAWL_GROUP.to_string()],
        }
    }
}
