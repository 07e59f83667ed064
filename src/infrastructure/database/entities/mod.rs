// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// SeaORM实体定义，与migration包中的表结构一一对应
pub mod attendance;
pub mod cohort;
pub mod session;
pub mod task;
pub mod task_progress;
pub mod user;
