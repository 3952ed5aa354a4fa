// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含爬取创建、状态查询和 Webhook 中继三个用例
/// 用例只依赖领域层的服务接口，与具体 HTTP 客户端分离
pub mod dto;
pub mod use_cases;
