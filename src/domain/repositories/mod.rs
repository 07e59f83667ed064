// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义数据访问的抽象接口，具体实现位于基础设施层。
/// 所有外键比较都在仓库层以统一的Uuid类型完成，
/// 不在调用点做逐次的ID规范化。
pub mod attendance_repository;
pub mod cohort_repository;
pub mod task_progress_repository;
pub mod task_repository;
pub mod user_repository;
pub mod vcs_metrics;
