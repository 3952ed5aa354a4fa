// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::utils::errors::RelayError;

/// 错误响应体格式
#[derive(Debug, Clone, Copy)]
enum ErrorEnvelope {
    /// `{error, errorTitle, errorMessage}`
    Detailed,
    /// `{error, message}`
    Webhook,
}

/// 应用错误类型
///
/// 携带路由相关的错误摘要，并把 [`RelayError`] 渲染为 JSON 响应
#[derive(Debug)]
pub struct AppError {
    summary: &'static str,
    envelope: ErrorEnvelope,
    source: RelayError,
}

impl AppError {
    /// `POST /crawl` 的错误
    pub fn crawl(source: RelayError) -> Self {
        Self {
            summary: "An error occurred while starting the crawl",
            envelope: ErrorEnvelope::Detailed,
            source,
        }
    }

    /// `GET /crawl/{id}` 的错误
    pub fn crawl_status(source: RelayError) -> Self {
        Self {
            summary: "An error occurred while getting crawl status",
            envelope: ErrorEnvelope::Detailed,
            source,
        }
    }

    /// `POST /webhook/crawl` 的错误
    pub fn webhook(source: RelayError) -> Self {
        Self {
            summary: "Webhook processing failed",
            envelope: ErrorEnvelope::Webhook,
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.source.status_code();
        let message = self.source.to_string();
        error!(status = status.as_u16(), "{}: {}", self.summary, message);

        let body = match self.envelope {
            ErrorEnvelope::Detailed => json!({
                "error": self.summary,
                "errorTitle": self.source.title(),
                "errorMessage": message,
            }),
            ErrorEnvelope::Webhook => json!({
                "error": self.summary,
                "message": message,
            }),
        };

        (status, Json(body)).into_response()
    }
}
