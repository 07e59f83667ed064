// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task_progress::{ProgressStatus, TaskProgress};
use serde::Serialize;
use uuid::Uuid;

/// 待审核状态下视为完成所需的最低百分比
pub const REVIEW_COMPLETION_THRESHOLD: i32 = 90;

/// 判定一条进度记录是否计为已完成
///
/// 系统中唯一的"已完成"定义：状态为已完成，或状态为
/// 待审核且完成百分比不低于阈值。所有聚合端点都必须
/// 经由此函数，避免各处判定逻辑漂移。
pub fn is_completed(status: ProgressStatus, progress: i32) -> bool {
    match status {
        ProgressStatus::Completed => true,
        ProgressStatus::InReview => progress >= REVIEW_COMPLETION_THRESHOLD,
        _ => false,
    }
}

/// 计算完成率（四舍五入的百分比，总数为0时返回0）
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed * 100) as f64 / total as f64).round() as u32
}

/// 进度快照
///
/// 单个实习生对单个任务的进度视图。缺失的进度记录被合成为
/// "未开始 / 0%"，保证每个应出现的实习生都出现在概览中。
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    /// 实习生ID
    pub intern_id: Uuid,
    /// 进度状态
    pub status: ProgressStatus,
    /// 完成百分比
    pub progress: i32,
    /// 已获得积分
    pub points_earned: i32,
    /// 已记录工时（小时）
    pub hours_logged: f64,
}

impl ProgressSnapshot {
    /// 从可能缺失的进度记录合成快照
    pub fn from_record(intern_id: Uuid, record: Option<&TaskProgress>) -> Self {
        match record {
            Some(record) => Self {
                intern_id,
                status: record.status,
                progress: record.progress,
                points_earned: record.points_earned,
                hours_logged: record.hours_logged(),
            },
            None => Self {
                intern_id,
                status: ProgressStatus::NotStarted,
                progress: 0,
                points_earned: 0,
                hours_logged: 0.0,
            },
        }
    }
}

/// 状态排序优先级，数值越大越靠前
fn status_priority(status: ProgressStatus) -> u8 {
    match status {
        ProgressStatus::Completed => 4,
        ProgressStatus::InReview => 3,
        ProgressStatus::InProgress => 2,
        ProgressStatus::NotStarted => 1,
        ProgressStatus::Cancelled => 0,
    }
}

/// 按状态优先级降序、完成百分比降序排序进度概览
pub fn sort_overview(snapshots: &mut [ProgressSnapshot]) {
    snapshots.sort_by(|a, b| {
        status_priority(b.status)
            .cmp(&status_priority(a.status))
            .then(b.progress.cmp(&a.progress))
    });
}

/// 进度概览汇总
#[derive(Debug, Clone, Serialize)]
pub struct OverviewSummary {
    /// 范围内实习生总数
    pub total_interns: usize,
    /// 已完成人数
    pub completed_count: usize,
    /// 平均完成百分比（四舍五入）
    pub average_progress: u32,
    /// 完成率（百分比）
    pub completion_rate: u32,
}

/// 汇总一组进度快照
pub fn summarize(snapshots: &[ProgressSnapshot]) -> OverviewSummary {
    let total = snapshots.len();
    let completed = snapshots
        .iter()
        .filter(|s| is_completed(s.status, s.progress))
        .count();
    let average_progress = if total == 0 {
        0
    } else {
        (snapshots.iter().map(|s| s.progress as i64).sum::<i64>() as f64 / total as f64).round()
            as u32
    };

    OverviewSummary {
        total_interns: total,
        completed_count: completed,
        average_progress,
        completion_rate: completion_rate(completed, total),
    }
}

/// 排行榜计算输入：一个实习生及其全部任务记录
#[derive(Debug, Clone)]
pub struct InternScore {
    /// 实习生ID
    pub user_id: Uuid,
    /// 用户名
    pub username: String,
    /// 显示名称
    pub display_name: String,
    /// 该实习生的所有（任务积分，进度状态，百分比）记录；
    /// 无进度记录的任务以未开始/0%传入
    pub records: Vec<TaskRecord>,
}

/// 单条任务记录，排行榜计分的最小单位
#[derive(Debug, Clone, Copy)]
pub struct TaskRecord {
    /// 任务配置的积分值
    pub task_points: i32,
    /// 进度状态
    pub status: ProgressStatus,
    /// 完成百分比
    pub progress: i32,
}

/// 排行榜条目
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// 实习生ID
    pub user_id: Uuid,
    /// 用户名
    pub username: String,
    /// 显示名称
    pub display_name: String,
    /// 任务总数
    pub total_tasks: usize,
    /// 已完成任务数
    pub completed_tasks: usize,
    /// 完成率（百分比）
    pub completion_rate: u32,
    /// 已获得积分总和
    pub points_earned: i64,
    /// 名次，1..N的排列，无间隙无重复
    pub rank: usize,
    /// 是否为发起请求的用户
    pub is_current_user: bool,
}

/// 计算排行榜
///
/// 积分 = 已完成任务的积分值之和。排序：积分降序，
/// 完成数降序，随后保持输入顺序（稳定排序），保证结果
/// 确定。名次按排序后的位置赋值。
pub fn rank_leaderboard(scores: Vec<InternScore>, current_user: Uuid) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = scores
        .into_iter()
        .map(|score| {
            let total = score.records.len();
            let completed: Vec<&TaskRecord> = score
                .records
                .iter()
                .filter(|r| is_completed(r.status, r.progress))
                .collect();
            let points: i64 = completed.iter().map(|r| r.task_points as i64).sum();

            LeaderboardEntry {
                user_id: score.user_id,
                username: score.username,
                display_name: score.display_name,
                total_tasks: total,
                completed_tasks: completed.len(),
                completion_rate: completion_rate(completed.len(), total),
                points_earned: points,
                rank: 0,
                is_current_user: score.user_id == current_user,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.points_earned
            .cmp(&a.points_earned)
            .then(b.completed_tasks.cmp(&a.completed_tasks))
    });

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    entries
}
