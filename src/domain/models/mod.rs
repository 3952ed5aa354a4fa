// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 爬取请求、Webhook 通知和摄取请求的数据结构
pub mod crawl;
pub mod ingest;
pub mod webhook;
