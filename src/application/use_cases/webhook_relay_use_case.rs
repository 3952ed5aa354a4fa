// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    domain::{
        models::{
            ingest::{IngestOutcome, IngestRequest},
            webhook::{WebhookEventType, WebhookPayload},
        },
        services::ingest_service::IngestService,
    },
    utils::errors::RelayError,
};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Webhook 中继用例
///
/// 将 `crawl.page` 通知中的每个页面按顺序投递到摄取服务。
/// 摄取服务拒绝某个页面时记录后继续；配置缺失或网络错误中止整个批次，
/// 后续页面不再尝试，已投递的页面不回滚。
pub struct WebhookRelayUseCase<I> {
    ingest: Arc<I>,
}

impl<I> WebhookRelayUseCase<I>
where
    I: IngestService + 'static,
{
    pub fn new(ingest: Arc<I>) -> Self {
        Self { ingest }
    }

    /// 处理一次 Webhook 通知
    ///
    /// # 返回值
    ///
    /// * `Ok(usize)` - 被摄取服务接受的页面数，非页面事件为 0
    /// * `Err(RelayError)` - 缺少 `course_name`，或第一个未能送达页面的错误
    pub async fn handle(&self, payload: WebhookPayload) -> Result<usize, RelayError> {
        counter!(
            "relay_webhooks_received_total",
            "type" => payload.event_type.to_string()
        )
        .increment(1);

        if payload.event_type != WebhookEventType::CrawlPage {
            debug!(
                crawl_id = %payload.id,
                event_type = %payload.event_type,
                "Ignoring non-page webhook event"
            );
            return Ok(0);
        }

        if let Some(provider_error) = &payload.error {
            warn!(crawl_id = %payload.id, "Firecrawl reported an error: {}", provider_error);
        }

        if payload.data.is_empty() {
            return Ok(0);
        }

        let course_name = payload
            .metadata
            .as_ref()
            .map(|metadata| metadata.course_name.as_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                RelayError::Webhook("webhook metadata is missing course_name".to_string())
            })?;

        let total = payload.data.len();
        let mut accepted = 0;
        for (index, page) in payload.data.iter().enumerate() {
            let request = IngestRequest::from_page(page, course_name);
            debug!(
                crawl_id = %payload.id,
                index,
                source_url = ?request.url,
                content_len = request.content.len(),
                "Relaying crawled page"
            );

            match self.ingest.ingest(&request).await {
                Ok(IngestOutcome::Accepted) => {
                    accepted += 1;
                    counter!("relay_pages_ingested_total").increment(1);
                }
                Ok(IngestOutcome::Rejected { status }) => {
                    counter!("relay_pages_rejected_total").increment(1);
                    warn!(
                        crawl_id = %payload.id,
                        index,
                        status,
                        "Ingest service rejected page, continuing with next page"
                    );
                }
                Err(e) => {
                    counter!("relay_page_failures_total").increment(1);
                    error!(
                        crawl_id = %payload.id,
                        index,
                        skipped = total - index - 1,
                        "Page relay failed, aborting webhook batch: {}",
                        e
                    );
                    return Err(e);
                }
            }
        }

        info!(
            crawl_id = %payload.id,
            pages = total,
            accepted,
            course = course_name,
            "Relayed crawled pages"
        );
        Ok(accepted)
    }
}
