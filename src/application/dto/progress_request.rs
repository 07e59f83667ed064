// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::services::scoring::{OverviewSummary, ProgressSnapshot};

/// 进度初始化请求DTO
///
/// `action=initialize-progress`时针对单个（任务，实习生）对。
/// `action=bulk-initialize`时目标集合按优先级取自三种形式：
/// 显式实习生ID列表、指定班组ID、任务自身的班组分配。
#[derive(Debug, Deserialize, Serialize)]
pub struct InitializeProgressRequestDto {
    /// 目标任务ID
    pub task_id: Option<Uuid>,

    /// 目标实习生ID（单条初始化时必填）
    pub intern_id: Option<Uuid>,

    /// 显式目标实习生ID列表（批量初始化时可选）
    pub intern_ids: Option<Vec<Uuid>>,

    /// 目标班组ID，覆盖任务自身的分配（批量初始化时可选）
    pub cohort_id: Option<Uuid>,
}

/// 进度初始化响应DTO
///
/// 幂等操作：created与existing的计数区分本次新建与已存在
/// 的记录，重复调用不会产生重复记录。批量操作尽力而为，
/// 单条失败进入skipped列表而不中止整批。
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkInitializeResponseDto {
    /// 是否成功
    pub success: bool,

    /// 本次新建的记录数
    pub created: usize,

    /// 已存在而跳过的记录数
    pub existing: usize,

    /// 插入失败的实习生ID列表
    pub skipped: Vec<Uuid>,

    /// 目标实习生总数
    pub total: usize,
}

/// 进度概览中的实习生信息DTO
#[derive(Debug, Serialize)]
pub struct InternInfoDto {
    /// 实习生ID
    pub id: Uuid,

    /// 用户名
    pub username: String,

    /// 显示名称
    pub display_name: String,
}

/// 进度概览条目DTO
#[derive(Debug, Serialize)]
pub struct ProgressOverviewEntryDto {
    /// 实习生信息
    pub intern: InternInfoDto,

    /// 进度快照，缺失记录合成为未开始
    #[serde(flatten)]
    pub snapshot: ProgressSnapshot,
}

/// 进度概览响应DTO
#[derive(Debug, Serialize)]
pub struct ProgressOverviewResponseDto {
    /// 是否成功
    pub success: bool,

    /// 任务ID
    pub task_id: Uuid,

    /// 汇总统计
    pub summary: OverviewSummary,

    /// 按状态优先级与完成百分比排序的条目列表
    pub progress_overview: Vec<ProgressOverviewEntryDto>,
}
