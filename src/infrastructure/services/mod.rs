// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施服务模块
///
/// 提供领域服务接口的 HTTP 实现
/// 包括 Firecrawl 客户端和摄取服务客户端
pub mod firecrawl_client;
pub mod http_client;
pub mod ingest_client;
