// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 班组实体
///
/// 共享同一时间线的实习生分组，是批量任务分配和
/// 排行榜范围计算的单位。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cohort {
    /// 班组唯一标识符
    pub id: Uuid,
    /// 班组名称
    pub name: String,
    /// 所属学院ID（可选）
    pub college_id: Option<Uuid>,
    /// 开始日期
    pub start_date: Option<NaiveDate>,
    /// 结束日期
    pub end_date: Option<NaiveDate>,
    /// 活跃标志
    pub active: bool,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl Cohort {
    /// 创建一个新的班组
    pub fn new(name: String, college_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            college_id,
            start_date: None,
            end_date: None,
            active: true,
            created_at: Utc::now().into(),
        }
    }
}
