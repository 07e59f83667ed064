// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 错误处理模块
pub mod errors;

/// 提取器模块
pub mod extractors;

/// 处理器模块
pub mod handlers;

/// 中间件模块
pub mod middleware;

/// 路由模块
pub mod routes;
