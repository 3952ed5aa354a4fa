// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ingest::{IngestOutcome, IngestRequest};
use crate::utils::errors::RelayError;
use async_trait::async_trait;

/// 摄取服务特质
///
/// 将单个页面内容投递到下游摄取端点
#[async_trait]
pub trait IngestService: Send + Sync {
    /// 投递一个页面
    ///
    /// # 参数
    ///
    /// * `request` - 摄取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(IngestOutcome)` - 请求已送达，附带摄取服务是否接受
    /// * `Err(RelayError)` - 配置缺失或网络错误，请求未送达
    async fn ingest(&self, request: &IngestRequest) -> Result<IngestOutcome, RelayError>;
}
