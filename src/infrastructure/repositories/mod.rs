// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于SeaORM的数据访问层实现
pub mod attendance_repo_impl;
pub mod cohort_repo_impl;
pub mod task_progress_repo_impl;
pub mod task_repo_impl;
pub mod user_repo_impl;
