// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 定义与外部系统交互的服务接口：
/// - 爬取服务提供方（crawl_provider）：提交爬取任务并查询状态
/// - 摄取服务（ingest_service）：将页面内容投递到下游索引系统
///
/// 具体实现位于基础设施层。
pub mod crawl_provider;
pub mod ingest_service;
