// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 扁平环境变量到配置键的映射
///
/// 这些变量名与已部署环境保持兼容，优先级高于文件和带前缀的环境变量
const FLAT_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("FIRECRAWL_API_URL", "firecrawl.api_url"),
    ("FIRECRAWL_API_KEY", "firecrawl.api_key"),
    ("WEBHOOK_URL", "firecrawl.webhook_url"),
    ("INGEST_URL", "ingest.url"),
    ("BEAM_API_KEY", "ingest.api_key"),
];

/// 应用程序配置设置
///
/// 包含服务器、Firecrawl、摄取服务和指标导出等配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Firecrawl 爬取服务配置
    #[serde(default)]
    pub firecrawl: FirecrawlSettings,
    /// 下游摄取服务配置
    #[serde(default)]
    pub ingest: IngestSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// Firecrawl 配置设置
///
/// 所有字段均为可选：缺失不会阻止启动，而是在请求时报告配置错误
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FirecrawlSettings {
    /// Firecrawl API 基础地址 (FIRECRAWL_API_URL)
    pub api_url: Option<String>,
    /// Firecrawl API 密钥，自托管实例可不设置 (FIRECRAWL_API_KEY)
    pub api_key: Option<String>,
    /// 向 Firecrawl 注册的 Webhook 回调地址 (WEBHOOK_URL)
    pub webhook_url: Option<String>,
}

/// 摄取服务配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngestSettings {
    /// 摄取端点地址 (INGEST_URL)
    pub url: Option<String>,
    /// Bearer 凭证 (BEAM_API_KEY)
    pub api_key: Option<String>,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从进程环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// 从给定的变量表加载配置
    ///
    /// 加载顺序：默认值、配置文件、`CRAWL_RELAY__` 前缀变量、扁平变量名
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, ConfigError> {
        let env = vars
            .get("APP_ENVIRONMENT")
            .cloned()
            .unwrap_or_else(|| "default".to_string());

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3003)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("CRAWL_RELAY")
                    .separator("__")
                    .source(Some(vars.clone())),
            );

        // Empty values behave as unset
        for (var, key) in FLAT_ENV_OVERRIDES {
            let value = vars.get(*var).filter(|v| !v.trim().is_empty()).cloned();
            builder = builder.set_override_option(*key, value)?;
        }

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.firecrawl.api_url = non_empty(settings.firecrawl.api_url.take());
        settings.firecrawl.api_key = non_empty(settings.firecrawl.api_key.take());
        settings.firecrawl.webhook_url = non_empty(settings.firecrawl.webhook_url.take());
        settings.ingest.url = non_empty(settings.ingest.url.take());
        settings.ingest.api_key = non_empty(settings.ingest.api_key.take());
        Ok(settings)
    }

    /// 列出缺失的可选上游配置，供启动时告警
    pub fn missing_upstream_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.firecrawl.api_url.is_none() {
            missing.push("FIRECRAWL_API_URL");
        }
        if self.firecrawl.webhook_url.is_none() {
            missing.push("WEBHOOK_URL");
        }
        if self.ingest.url.is_none() {
            missing.push("INGEST_URL");
        }
        if self.ingest.api_key.is_none() {
            missing.push("BEAM_API_KEY");
        }
        missing
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
