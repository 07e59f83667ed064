// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 考勤处理器模块
pub mod attendance_handler;

/// 班组处理器模块
pub mod cohort_handler;

/// 排行榜处理器模块
pub mod leaderboard_handler;

/// 里程碑处理器模块
pub mod milestone_handler;

/// 进度处理器模块
pub mod progress_handler;

/// 任务处理器模块
pub mod task_handler;

/// 用户管理处理器模块
pub mod user_handler;
