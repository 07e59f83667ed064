// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::services::milestones::Achievement;
use crate::domain::services::scoring::LeaderboardEntry;

/// 排行榜查询参数DTO
#[derive(Debug, Deserialize, Serialize)]
pub struct LeaderboardQueryDto {
    /// 范围：college、cohort或global，缺省为college
    pub scope: Option<String>,
}

/// 排行榜响应DTO
#[derive(Debug, Serialize)]
pub struct LeaderboardResponseDto {
    /// 是否成功
    pub success: bool,

    /// 实际使用的范围
    pub scope: String,

    /// 按名次排列的条目
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// 里程碑响应DTO
#[derive(Debug, Serialize)]
pub struct MilestonesResponseDto {
    /// 是否成功
    pub success: bool,

    /// 已完成任务数
    pub completed_tasks: u64,

    /// 出勤天数
    pub attendance_days: u64,

    /// 代码提交数
    pub commit_count: u64,

    /// 已达成优先、随后按进度降序的成就列表
    pub achievements: Vec<Achievement>,
}
