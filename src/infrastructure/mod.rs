// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与外部系统的交互：
/// - 指标（metrics）：Prometheus 导出器
/// - 服务实现（services）：Firecrawl 与摄取服务的 HTTP 客户端
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod metrics;
pub mod services;
