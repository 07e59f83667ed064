// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 考勤请求DTO模块
pub mod attendance_request;

/// 排行榜与里程碑DTO模块
pub mod leaderboard;

/// 进度请求DTO模块
pub mod progress_request;

/// 任务请求DTO模块
pub mod task_request;

/// 用户管理DTO模块
pub mod user_request;
