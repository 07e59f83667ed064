// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 里程碑推导输入
///
/// 全部为计数值，其中提交数来自外部GitLab协作方，
/// 此处仅作为不透明计数消费。
#[derive(Debug, Clone, Copy, Default)]
pub struct MilestoneInputs {
    /// 已完成任务数
    pub completed_tasks: u64,
    /// 代码提交数
    pub commit_count: u64,
    /// 出勤天数
    pub attendance_days: u64,
    /// 账户年龄（天）
    pub account_age_days: u64,
    /// 完成率（百分比）
    pub completion_rate: u64,
}

/// 成就记录
///
/// 纯展示用的推导结果，不需要独立持久化的实体
#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    /// 成就标识
    pub id: &'static str,
    /// 成就标题
    pub title: &'static str,
    /// 达成阈值
    pub threshold: u64,
    /// 成就积分
    pub points: i32,
    /// 是否已达成
    pub achieved: bool,
    /// 未达成时的进度百分比（已达成时为100）
    pub progress_pct: u32,
}

/// 阈值表：(标识, 标题, 阈值, 积分, 输入值选择器)
struct Tier {
    id: &'static str,
    title: &'static str,
    threshold: u64,
    points: i32,
}

const TASK_TIERS: &[Tier] = &[
    Tier { id: "first_task", title: "First Task Completed", threshold: 1, points: 5 },
    Tier { id: "task_5", title: "Five Tasks Completed", threshold: 5, points: 15 },
    Tier { id: "task_10", title: "Ten Tasks Completed", threshold: 10, points: 30 },
];

const ATTENDANCE_TIERS: &[Tier] = &[
    Tier { id: "attendance_7", title: "One Week Present", threshold: 7, points: 10 },
    Tier { id: "attendance_14", title: "Two Weeks Present", threshold: 14, points: 20 },
    Tier { id: "attendance_30", title: "One Month Present", threshold: 30, points: 40 },
    Tier { id: "attendance_60", title: "Two Months Present", threshold: 60, points: 60 },
    Tier { id: "attendance_90", title: "Three Months Present", threshold: 90, points: 90 },
];

const COMPLETION_RATE_TIERS: &[Tier] = &[
    Tier { id: "rate_50", title: "Half Way There", threshold: 50, points: 10 },
    Tier { id: "rate_75", title: "Consistent Finisher", threshold: 75, points: 20 },
    Tier { id: "rate_90", title: "Reliable Achiever", threshold: 90, points: 35 },
    Tier { id: "rate_95", title: "Near Perfect", threshold: 95, points: 50 },
];

const COMMIT_TIERS: &[Tier] = &[
    Tier { id: "commit_10", title: "Ten Commits", threshold: 10, points: 10 },
    Tier { id: "commit_50", title: "Fifty Commits", threshold: 50, points: 25 },
    Tier { id: "commit_100", title: "Hundred Commits", threshold: 100, points: 50 },
];

const TENURE_TIERS: &[Tier] = &[
    Tier { id: "tenure_30", title: "One Month Aboard", threshold: 30, points: 10 },
    Tier { id: "tenure_90", title: "One Quarter Aboard", threshold: 90, points: 30 },
];

fn achievements_for(tiers: &'static [Tier], value: u64) -> impl Iterator<Item = Achievement> {
    tiers.iter().map(move |tier| {
        let achieved = value >= tier.threshold;
        let progress_pct = if achieved {
            100
        } else {
            ((value * 100) as f64 / tier.threshold as f64).round() as u32
        };
        Achievement {
            id: tier.id,
            title: tier.title,
            threshold: tier.threshold,
            points: tier.points,
            achieved,
            progress_pct,
        }
    })
}

/// 从计数推导成就列表
///
/// 纯函数：固定阈值表，已达成的排在前面，未达成的按
/// 进度百分比降序排列。
pub fn derive_achievements(inputs: &MilestoneInputs) -> Vec<Achievement> {
    let mut achievements: Vec<Achievement> = achievements_for(TASK_TIERS, inputs.completed_tasks)
        .chain(achievements_for(ATTENDANCE_TIERS, inputs.attendance_days))
        .chain(achievements_for(COMPLETION_RATE_TIERS, inputs.completion_rate))
        .chain(achievements_for(COMMIT_TIERS, inputs.commit_count))
        .chain(achievements_for(TENURE_TIERS, inputs.account_age_days))
        .collect();

    achievements.sort_by(|a, b| {
        b.achieved
            .cmp(&a.achieved)
            .then(b.progress_pct.cmp(&a.progress_pct))
    });

    achievements
}
