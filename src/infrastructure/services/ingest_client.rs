// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::IngestSettings;
use crate::domain::models::ingest::{IngestOutcome, IngestRequest};
use crate::domain::services::ingest_service::IngestService;
use crate::utils::errors::RelayError;
use async_trait::async_trait;
use tracing::warn;

/// 摄取服务HTTP客户端
pub struct HttpIngestClient {
    client: reqwest::Client,
    url: Option<String>,
    api_key: Option<String>,
}

impl HttpIngestClient {
    pub fn new(client: reqwest::Client, settings: &IngestSettings) -> Self {
        Self {
            client,
            url: settings.url.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

#[async_trait]
impl IngestService for HttpIngestClient {
    async fn ingest(&self, request: &IngestRequest) -> Result<IngestOutcome, RelayError> {
        let url = self
            .url
            .as_deref()
            .ok_or(RelayError::MissingConfig("INGEST_URL"))?;

        let mut builder = self.client.post(url).json(request);
        match &self.api_key {
            Some(key) => builder = builder.bearer_auth(key),
            None => warn!("BEAM_API_KEY is not set, sending ingest request without credentials"),
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                source_url = ?request.url,
                body = %body,
                "Ingest API rejected page"
            );
            return Ok(IngestOutcome::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(IngestOutcome::Accepted)
    }
}
