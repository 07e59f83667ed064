// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{DomainError, TimeLogEntry};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 任务进度实体
///
/// 每个（任务，实习生）对的完成记录，与任务自身的聚合状态
/// 相互独立。惰性创建（首次访问时）或由管理员针对整个班组
/// 批量初始化。积分大于0与百分比等于100都蕴含完成状态，
/// 由推导逻辑维护而非独立存储。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskProgress {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 所属任务ID
    pub task_id: Uuid,
    /// 实习生ID，与task_id构成唯一对
    pub intern_id: Uuid,
    /// 进度状态
    pub status: ProgressStatus,
    /// 完成百分比（0-100）
    pub progress: i32,
    /// 已获得积分，完成时等于任务配置的积分值
    pub points_earned: i32,
    /// 提交的URL
    pub submission_url: Option<String>,
    /// 提交备注
    pub submission_note: Option<String>,
    /// 工时记录列表，追加式有序序列
    pub time_logs: Vec<TimeLogEntry>,
    /// 审核反馈
    pub feedback: Option<String>,
    /// 审核人ID
    pub reviewed_by: Option<Uuid>,
    /// 求助标志
    pub needs_help: bool,
    /// 完成时间
    pub completed_at: Option<DateTime<FixedOffset>>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 进度状态枚举
///
/// 从实习生视角跟踪单个任务的进展：
/// NotStarted → InProgress → InReview → Completed
/// Cancelled随任务取消而设置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// 未开始
    #[default]
    NotStarted,
    /// 进行中
    InProgress,
    /// 待审核
    InReview,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProgressStatus::NotStarted => write!(f, "not_started"),
            ProgressStatus::InProgress => write!(f, "in_progress"),
            ProgressStatus::InReview => write!(f, "in_review"),
            ProgressStatus::Completed => write!(f, "completed"),
            ProgressStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for ProgressStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(ProgressStatus::NotStarted),
            "in_progress" => Ok(ProgressStatus::InProgress),
            "in_review" => Ok(ProgressStatus::InReview),
            "completed" => Ok(ProgressStatus::Completed),
            "cancelled" => Ok(ProgressStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl TaskProgress {
    /// 创建一条默认进度记录（未开始，0%）
    ///
    /// 批量初始化与惰性创建都经由此构造函数
    pub fn new(task_id: Uuid, intern_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            intern_id,
            status: ProgressStatus::NotStarted,
            progress: 0,
            points_earned: 0,
            submission_url: None,
            submission_note: None,
            time_logs: Vec::new(),
            feedback: None,
            reviewed_by: None,
            needs_help: false,
            completed_at: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    /// 更新完成百分比并推导状态
    ///
    /// 100时进入已完成并按任务积分计分；从已完成回退时
    /// 积分与完成时间一并清除，保持"积分大于0蕴含完成"
    /// 的不变式。
    ///
    /// # 参数
    ///
    /// * `progress` - 完成百分比，必须在[0,100]内
    /// * `task_points` - 任务配置的积分值
    pub fn apply_progress(&mut self, progress: i32, task_points: i32) -> Result<(), DomainError> {
        if !(0..=100).contains(&progress) {
            return Err(DomainError::ValidationError(
                "progress must be between 0 and 100".to_string(),
            ));
        }
        if self.status == ProgressStatus::Cancelled {
            return Err(DomainError::InvalidStateTransition);
        }

        self.progress = progress;
        if progress == 0 {
            if self.status != ProgressStatus::NotStarted {
                self.status = ProgressStatus::NotStarted;
            }
            self.points_earned = 0;
            self.completed_at = None;
        } else if progress < 100 {
            self.status = ProgressStatus::InProgress;
            self.points_earned = 0;
            self.completed_at = None;
        } else {
            self.status = ProgressStatus::Completed;
            self.points_earned = task_points;
            self.completed_at = Some(Utc::now().into());
        }
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 标记完成并计分
    pub fn complete(&mut self, task_points: i32) -> Result<(), DomainError> {
        if self.status == ProgressStatus::Cancelled {
            return Err(DomainError::InvalidStateTransition);
        }
        self.status = ProgressStatus::Completed;
        self.progress = 100;
        self.points_earned = task_points;
        self.completed_at = Some(Utc::now().into());
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 提交工作成果，进入待审核状态
    pub fn submit(&mut self, url: String, note: Option<String>) -> Result<(), DomainError> {
        if url.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "submission url is required".to_string(),
            ));
        }
        if matches!(
            self.status,
            ProgressStatus::Completed | ProgressStatus::Cancelled
        ) {
            return Err(DomainError::InvalidStateTransition);
        }
        self.submission_url = Some(url);
        self.submission_note = note;
        self.status = ProgressStatus::InReview;
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 随任务取消而取消，已获积分一并清除
    pub fn cancel(&mut self) {
        self.status = ProgressStatus::Cancelled;
        self.points_earned = 0;
        self.completed_at = None;
        self.updated_at = Utc::now().into();
    }

    /// 记录审核反馈
    pub fn review(&mut self, reviewer: Uuid, feedback: String) {
        self.reviewed_by = Some(reviewer);
        self.feedback = Some(feedback);
        self.updated_at = Utc::now().into();
    }

    /// 追加工时记录
    pub fn add_time_log(
        &mut self,
        minutes: u32,
        note: Option<String>,
    ) -> Result<(), DomainError> {
        if minutes == 0 {
            return Err(DomainError::ValidationError(
                "minutes must be greater than zero".to_string(),
            ));
        }
        self.time_logs.push(TimeLogEntry {
            id: Uuid::new_v4(),
            user_id: self.intern_id,
            minutes,
            note,
            logged_at: Utc::now().into(),
        });
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 已记录的总工时（小时）
    pub fn hours_logged(&self) -> f64 {
        let minutes: u64 = self.time_logs.iter().map(|l| l.minutes as u64).sum();
        minutes as f64 / 60.0
    }
}
