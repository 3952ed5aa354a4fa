// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::webhook_relay_use_case::WebhookRelayUseCase;
use crate::domain::models::webhook::WebhookPayload;
use crate::domain::services::ingest_service::IngestService;
use crate::presentation::errors::AppError;
use crate::utils::errors::RelayError;
use axum::{extract::rejection::JsonRejection, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// 接收 Firecrawl 的爬取回调
pub async fn crawl_webhook<I: IngestService + 'static>(
    Extension(ingest): Extension<Arc<I>>,
    payload: Result<Json<WebhookPayload>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) =
        payload.map_err(|e| AppError::webhook(RelayError::InvalidPayload(e.body_text())))?;

    let use_case = WebhookRelayUseCase::new(ingest);
    use_case.handle(payload).await.map_err(AppError::webhook)?;
    Ok(Json(json!({ "success": true })))
}
