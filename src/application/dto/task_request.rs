// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::task::{Task, TaskPriority};
use crate::domain::models::task_progress::TaskProgress;

/// 创建任务请求DTO
///
/// 必填字段以Option接收，由处理器统一收集缺失字段名并
/// 返回列出全部缺失项的验证错误。assignee_id与cohort_id
/// 恰好提供其一。
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateTaskRequestDto {
    /// 任务标题
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    /// 任务描述
    pub description: Option<String>,

    /// 任务分类
    pub category: Option<String>,

    /// 任务优先级，缺省为中
    pub priority: Option<TaskPriority>,

    /// 被分配实习生ID（与cohort_id互斥）
    pub assignee_id: Option<Uuid>,

    /// 被分配班组ID（与assignee_id互斥）
    pub cohort_id: Option<Uuid>,

    /// 积分值，缺省使用配置的默认值
    #[validate(range(min = 0, message = "Points must be non-negative"))]
    pub points: Option<i32>,

    /// 截止日期
    pub due_date: Option<DateTime<FixedOffset>>,

    /// 初始子任务标题列表
    pub subtasks: Option<Vec<String>>,
}

/// 更新任务请求DTO，所有字段可选
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateTaskRequestDto {
    /// 任务标题
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    /// 任务描述
    pub description: Option<String>,

    /// 任务分类
    pub category: Option<String>,

    /// 任务优先级
    pub priority: Option<TaskPriority>,

    /// 被分配实习生ID（与cohort_id互斥）
    pub assignee_id: Option<Uuid>,

    /// 被分配班组ID（与assignee_id互斥）
    pub cohort_id: Option<Uuid>,

    /// 积分值
    #[validate(range(min = 0, message = "Points must be non-negative"))]
    pub points: Option<i32>,

    /// 截止日期
    pub due_date: Option<DateTime<FixedOffset>>,
}

/// 进度更新请求DTO
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateProgressRequestDto {
    /// 完成百分比
    #[validate(range(min = 0, max = 100, message = "Progress must be between 0 and 100"))]
    pub progress: Option<i32>,
}

/// 提交工作成果请求DTO
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SubmitRequestDto {
    /// 提交URL
    #[validate(url(message = "Submission url must be a valid URL"))]
    pub url: Option<String>,

    /// 备注
    pub note: Option<String>,
}

/// 子任务勾选请求DTO
#[derive(Debug, Deserialize, Serialize)]
pub struct SubtaskUpdateRequestDto {
    /// 是否勾选完成
    pub done: bool,
}

/// 评论请求DTO
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CommentRequestDto {
    /// 评论内容
    #[validate(length(min = 1, message = "Comment body cannot be empty"))]
    pub body: Option<String>,
}

/// 单个任务响应DTO
#[derive(Debug, Serialize)]
pub struct TaskResponseDto {
    /// 是否成功
    pub success: bool,

    /// 任务实体
    pub task: Task,
}

/// 任务列表响应DTO
#[derive(Debug, Serialize)]
pub struct TaskListResponseDto {
    /// 是否成功
    pub success: bool,

    /// 按创建时间升序的任务列表
    pub tasks: Vec<Task>,
}

/// 单条进度记录响应DTO
#[derive(Debug, Serialize)]
pub struct ProgressRecordResponseDto {
    /// 是否成功
    pub success: bool,

    /// 进度记录
    pub record: TaskProgress,
}

/// 无负载操作响应DTO
#[derive(Debug, Serialize)]
pub struct OperationResponseDto {
    /// 是否成功
    pub success: bool,
}

/// 工时记录请求DTO
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct TimeLogRequestDto {
    /// 工时（分钟）
    #[validate(range(min = 1, message = "Minutes must be greater than zero"))]
    pub minutes: Option<u32>,

    /// 备注
    pub note: Option<String>,
}
