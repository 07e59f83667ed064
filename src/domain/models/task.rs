// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 任务实体
///
/// 表示分配给实习生的一个工作单元。任务要么分配给单个
/// 实习生，要么分配给整个班组（二者互斥，由Assignment
/// 判别联合保证）。任务携带积分值、截止日期、子任务清单
/// 以及追加式的评论、工时和提交记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务唯一标识符
    pub id: Uuid,
    /// 任务标题
    pub title: String,
    /// 任务描述
    pub description: String,
    /// 任务状态，跟踪任务在其生命周期中的当前阶段
    pub status: TaskStatus,
    /// 任务优先级
    pub priority: TaskPriority,
    /// 任务分类
    pub category: String,
    /// 分配方式：单个实习生或整个班组，二者互斥
    pub assignment: Assignment,
    /// 完成任务可获得的积分，非负
    pub points: i32,
    /// 截止日期
    pub due_date: DateTime<FixedOffset>,
    /// 整体完成百分比（0-100）
    pub progress: i32,
    /// 子任务清单，勾选状态驱动完成度推导
    pub subtasks: Vec<Subtask>,
    /// 评论列表，追加式有序序列
    pub comments: Vec<Comment>,
    /// 工时记录列表，追加式有序序列
    pub time_logs: Vec<TimeLogEntry>,
    /// 提交记录列表，追加式有序序列
    pub submissions: Vec<Submission>,
    /// 创建者ID
    pub created_by: Uuid,
    /// 完成者ID
    pub completed_by: Option<Uuid>,
    /// 完成时间
    pub completed_at: Option<DateTime<FixedOffset>>,
    /// 活跃标志，false表示已软删除
    pub active: bool,
    /// 删除操作者ID
    pub deleted_by: Option<Uuid>,
    /// 删除时间
    pub deleted_at: Option<DateTime<FixedOffset>>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 任务分配方式
///
/// 判别联合：一个任务在任意时刻要么属于单个实习生，
/// 要么属于一个班组，不存在两者同时设置的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum Assignment {
    /// 分配给单个实习生
    Individual(Uuid),
    /// 分配给整个班组
    Cohort(Uuid),
}

impl Assignment {
    /// 返回被分配的实习生ID（班组分配时为None）
    pub fn assignee_id(&self) -> Option<Uuid> {
        match self {
            Assignment::Individual(id) => Some(*id),
            Assignment::Cohort(_) => None,
        }
    }

    /// 返回被分配的班组ID（个人分配时为None）
    pub fn cohort_id(&self) -> Option<Uuid> {
        match self {
            Assignment::Individual(_) => None,
            Assignment::Cohort(id) => Some(*id),
        }
    }
}

/// 任务状态枚举
///
/// 状态转换在常规路径下单调递进：
/// Draft → Assigned → InProgress → InReview → Completed
/// 但允许回退（如取消勾选子任务时从Completed回到InProgress）。
/// Cancelled为终态，仅管理员可设置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// 草稿，任务已创建但尚未生效
    #[default]
    Draft,
    /// 已分配，等待开始
    Assigned,
    /// 进行中
    InProgress,
    /// 待审核，已提交工作成果
    InReview,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskStatus::Draft => write!(f, "draft"),
            TaskStatus::Assigned => write!(f, "assigned"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::InReview => write!(f, "in_review"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TaskStatus::Draft),
            "assigned" => Ok(TaskStatus::Assigned),
            "in_progress" => Ok(TaskStatus::InProgress),
            "in_review" => Ok(TaskStatus::InReview),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// 任务优先级枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// 低优先级
    Low,
    /// 中优先级
    #[default]
    Medium,
    /// 高优先级
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
        }
    }
}

impl FromStr for TaskPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(()),
        }
    }
}

/// 子任务记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    /// 子任务唯一标识符
    pub id: Uuid,
    /// 子任务标题
    pub title: String,
    /// 是否已勾选完成
    pub done: bool,
}

/// 评论记录，追加后不可修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// 评论唯一标识符
    pub id: Uuid,
    /// 评论作者ID
    pub author_id: Uuid,
    /// 评论内容
    pub body: String,
    /// 评论时间
    pub created_at: DateTime<FixedOffset>,
}

/// 工时记录，追加后不可修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLogEntry {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 记录者ID
    pub user_id: Uuid,
    /// 工时（分钟）
    pub minutes: u32,
    /// 备注
    pub note: Option<String>,
    /// 记录时间
    pub logged_at: DateTime<FixedOffset>,
}

/// 提交记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// 提交的URL
    pub url: String,
    /// 备注
    pub note: Option<String>,
    /// 提交者ID
    pub submitted_by: Uuid,
    /// 提交时间
    pub submitted_at: DateTime<FixedOffset>,
}

/// 领域错误类型
///
/// 表示在领域层可能发生的各种错误情况，包括状态转换错误
/// 和验证失败。
#[derive(Error, Debug)]
pub enum DomainError {
    /// 无效的状态转换，当任务状态转换不符合业务规则时发生
    #[error("Invalid state transition")]
    InvalidStateTransition,

    /// 验证错误，当输入数据不符合领域规则时发生
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl Task {
    /// 创建一个新的任务
    ///
    /// # 参数
    ///
    /// * `title` - 任务标题
    /// * `description` - 任务描述
    /// * `category` - 任务分类
    /// * `assignment` - 分配方式
    /// * `points` - 积分值，None时使用默认值
    /// * `due_date` - 截止日期
    /// * `created_by` - 创建者ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Task)` - 新创建的任务实例
    /// * `Err(DomainError)` - 积分值为负
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: String,
        category: String,
        priority: TaskPriority,
        assignment: Assignment,
        points: Option<i32>,
        default_points: i32,
        due_date: DateTime<FixedOffset>,
        created_by: Uuid,
    ) -> Result<Self, DomainError> {
        let points = points.unwrap_or(default_points);
        if points < 0 {
            return Err(DomainError::ValidationError(
                "points must be non-negative".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: TaskStatus::Assigned,
            priority,
            category,
            assignment,
            points,
            due_date,
            progress: 0,
            subtasks: Vec::new(),
            comments: Vec::new(),
            time_logs: Vec::new(),
            submissions: Vec::new(),
            created_by,
            completed_by: None,
            completed_at: None,
            active: true,
            deleted_by: None,
            deleted_at: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        })
    }

    /// 启动任务
    ///
    /// 被分配者显式开始任务时调用
    pub fn start(&mut self) -> Result<(), DomainError> {
        match self.status {
            TaskStatus::Draft | TaskStatus::Assigned => {
                self.status = TaskStatus::InProgress;
                self.updated_at = Utc::now().into();
                Ok(())
            }
            _ => Err(DomainError::InvalidStateTransition),
        }
    }

    /// 更新完成百分比并推导状态
    ///
    /// 0保持未开始，(0,100)进入进行中，100进入已完成。
    /// 从已完成回退时清除完成者与完成时间。
    ///
    /// # 参数
    ///
    /// * `progress` - 完成百分比，必须在[0,100]内
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 更新成功
    /// * `Err(DomainError)` - 百分比越界或任务处于终态
    pub fn apply_progress(&mut self, progress: i32) -> Result<(), DomainError> {
        if !(0..=100).contains(&progress) {
            return Err(DomainError::ValidationError(
                "progress must be between 0 and 100".to_string(),
            ));
        }
        if self.status == TaskStatus::Cancelled {
            return Err(DomainError::InvalidStateTransition);
        }

        self.progress = progress;
        if progress == 0 {
            if self.status == TaskStatus::InProgress || self.status == TaskStatus::Completed {
                self.status = TaskStatus::Assigned;
                self.completed_by = None;
                self.completed_at = None;
            }
        } else if progress < 100 {
            self.status = TaskStatus::InProgress;
            self.completed_by = None;
            self.completed_at = None;
        } else {
            self.status = TaskStatus::Completed;
            self.completed_at = Some(Utc::now().into());
        }
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 完成任务
    ///
    /// 显式标记完成，记录完成者与完成时间
    pub fn complete(&mut self, by: Uuid) -> Result<(), DomainError> {
        if self.status == TaskStatus::Cancelled {
            return Err(DomainError::InvalidStateTransition);
        }
        self.status = TaskStatus::Completed;
        self.progress = 100;
        self.completed_by = Some(by);
        self.completed_at = Some(Utc::now().into());
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 提交工作成果
    ///
    /// 提交URL必填，任务进入待审核状态
    pub fn submit(&mut self, submission: Submission) -> Result<(), DomainError> {
        if submission.url.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "submission url is required".to_string(),
            ));
        }
        if matches!(self.status, TaskStatus::Completed | TaskStatus::Cancelled) {
            return Err(DomainError::InvalidStateTransition);
        }
        self.submissions.push(submission);
        self.status = TaskStatus::InReview;
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 勾选或取消勾选子任务并重新推导完成度
    ///
    /// 全部勾选时任务进入已完成；若任务此前因子任务全勾选
    /// 而完成，取消勾选任一子任务会使任务回退到进行中，
    /// 完成百分比重算为 completed / total * 100（取整）。
    pub fn set_subtask(&mut self, subtask_id: Uuid, done: bool) -> Result<(), DomainError> {
        if self.status == TaskStatus::Cancelled {
            return Err(DomainError::InvalidStateTransition);
        }

        let subtask = self
            .subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
            .ok_or_else(|| DomainError::ValidationError("subtask not found".to_string()))?;
        subtask.done = done;

        let total = self.subtasks.len();
        let completed = self.subtasks.iter().filter(|s| s.done).count();
        self.progress = ((completed * 100) as f64 / total as f64).round() as i32;

        if completed == total {
            self.status = TaskStatus::Completed;
            self.completed_at = Some(Utc::now().into());
        } else {
            if self.status == TaskStatus::Completed {
                self.completed_by = None;
                self.completed_at = None;
            }
            self.status = if completed == 0 {
                TaskStatus::Assigned
            } else {
                TaskStatus::InProgress
            };
        }
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 取消任务
    ///
    /// 仅管理员可调用（在表示层检查），终态
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        match self.status {
            TaskStatus::Completed | TaskStatus::Cancelled => {
                Err(DomainError::InvalidStateTransition)
            }
            _ => {
                self.status = TaskStatus::Cancelled;
                self.updated_at = Utc::now().into();
                Ok(())
            }
        }
    }

    /// 追加评论
    pub fn add_comment(&mut self, author_id: Uuid, body: String) -> Result<(), DomainError> {
        if body.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "comment body cannot be empty".to_string(),
            ));
        }
        self.comments.push(Comment {
            id: Uuid::new_v4(),
            author_id,
            body,
            created_at: Utc::now().into(),
        });
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 追加工时记录
    pub fn add_time_log(
        &mut self,
        user_id: Uuid,
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
            user_id,
            minutes,
            note,
            logged_at: Utc::now().into(),
        });
        self.updated_at = Utc::now().into();
        Ok(())
    }

    /// 更换分配方式
    ///
    /// 判别联合保证互斥，旧分配方式的字段随之消失
    pub fn reassign(&mut self, assignment: Assignment) {
        self.assignment = assignment;
        self.updated_at = Utc::now().into();
    }

    /// 软删除任务，记录操作者与时间
    pub fn soft_delete(&mut self, by: Uuid) {
        self.active = false;
        self.deleted_by = Some(by);
        self.deleted_at = Some(Utc::now().into());
        self.updated_at = Utc::now().into();
    }
}
