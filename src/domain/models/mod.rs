// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 包含系统的核心业务实体：
/// - 用户（user）：身份与角色模型
/// - 班组（cohort）：实习生分组，批量分配任务的单位
/// - 任务（task）：工作单元，含分配方式与生命周期状态
/// - 任务进度（task_progress）：每个实习生对某任务的完成记录
/// - 考勤（attendance）：每日签到签退记录及状态推导
pub mod attendance;
pub mod cohort;
pub mod task;
pub mod task_progress;
pub mod user;
