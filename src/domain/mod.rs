// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心数据结构和服务接口：
/// - 领域模型（models）：爬取请求、Webhook 通知和摄取请求
/// - 服务（services）：爬取提供方和摄取服务的抽象接口
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod services;
