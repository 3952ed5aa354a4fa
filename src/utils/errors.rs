// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use thiserror::Error;

/// 中继错误类型
///
/// 覆盖配置缺失、上游 HTTP 状态、网络传输、响应解码、Webhook 处理和请求负载错误
#[derive(Error, Debug)]
pub enum RelayError {
    /// 必需的环境变量未设置
    #[error("{0} environment variable is not defined")]
    MissingConfig(&'static str),

    /// 环境变量存在但无法使用
    #[error("{name} is not a valid URL: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    /// Firecrawl 返回非成功状态
    #[error("Firecrawl API error: {status} {reason}")]
    Provider { status: u16, reason: String },

    /// Webhook 通知无法中继
    #[error("{0}")]
    Webhook(String),

    /// 网络层错误，原样传播
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// 上游响应不是预期的 JSON
    #[error("Invalid upstream response: {0}")]
    Decode(String),

    /// 入站请求负载无效
    #[error("{0}")]
    InvalidPayload(String),
}

impl RelayError {
    /// 错误类别名称，作为响应中的 `errorTitle`
    pub fn title(&self) -> &'static str {
        match self {
            RelayError::MissingConfig(_) | RelayError::InvalidConfig { .. } => "ConfigError",
            RelayError::Provider { .. } => "ProviderError",
            RelayError::Webhook(_) => "WebhookError",
            RelayError::Transport(_) => "TransportError",
            RelayError::Decode(_) => "DecodeError",
            RelayError::InvalidPayload(_) => "InvalidPayload",
        }
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 由非成功的上游状态构造错误
    pub fn provider(status: reqwest::StatusCode) -> Self {
        RelayError::Provider {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}
