// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了复杂的
/// 业务规则和领域逻辑，协调多个领域对象来完成业务操作。
///
/// 包含的服务：
/// - 积分服务（scoring）："已完成"判定、完成率、排行榜排名与
///   进度快照合成的唯一权威定义，所有读端点共用
/// - 里程碑服务（milestones）：基于固定阈值从计数推导成就
///
/// 两个服务都是纯函数集合，不访问任何外部状态。
pub mod milestones;
pub mod scoring;
