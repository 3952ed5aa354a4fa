// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use reqwest::Response;
use serde_json::Value;

use crate::utils::errors::RelayError;

/// 创建共享的 HTTP 客户端
///
/// 超时沿用传输层默认值，连接池在 Firecrawl 与摄取客户端之间共享
pub fn build_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}

/// 读取响应体并解析为 JSON，不检查状态码
pub(crate) async fn read_json(response: Response) -> Result<Value, RelayError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| RelayError::Decode(e.to_string()))
}
