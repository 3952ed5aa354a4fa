// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::{CrawlRequest, CrawlResponse};
use crate::utils::errors::RelayError;
use async_trait::async_trait;
use serde_json::Value;

/// 爬取服务提供方特质
///
/// 定义提交爬取任务和查询任务状态的接口
#[async_trait]
pub trait CrawlProvider: Send + Sync {
    /// 提交爬取任务
    ///
    /// # 参数
    ///
    /// * `request` - 爬取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(CrawlResponse)` - 提供方返回的响应及任务ID
    /// * `Err(RelayError)` - 配置缺失、上游非成功状态或网络错误
    async fn submit_crawl(&self, request: &CrawlRequest) -> Result<CrawlResponse, RelayError>;

    /// 查询爬取任务状态
    ///
    /// 返回提供方的状态文档，不做任何转换
    async fn crawl_status(&self, crawl_id: &str) -> Result<Value, RelayError>;
}
