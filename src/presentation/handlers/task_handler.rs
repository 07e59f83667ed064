// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::task_request::{
    CommentRequestDto, CreateTaskRequestDto, OperationResponseDto, ProgressRecordResponseDto,
    SubmitRequestDto, SubtaskUpdateRequestDto, TaskListResponseDto, TaskResponseDto,
    TimeLogRequestDto, UpdateProgressRequestDto, UpdateTaskRequestDto,
};
use crate::config::settings::Settings;
use crate::domain::models::task::{Assignment, Submission, Subtask, Task, TaskStatus};
use crate::domain::models::task_progress::TaskProgress;
use crate::domain::repositories::task_progress_repository::TaskProgressRepository;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::CurrentUser;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 从互斥的两个分配字段构造分配方式
///
/// 恰好提供其中一个，否则返回验证错误
fn assignment_from_fields(
    assignee_id: Option<Uuid>,
    cohort_id: Option<Uuid>,
) -> Result<Assignment, AppError> {
    match (assignee_id, cohort_id) {
        (Some(assignee), None) => Ok(Assignment::Individual(assignee)),
        (None, Some(cohort)) => Ok(Assignment::Cohort(cohort)),
        _ => Err(AppError::Validation(
            "Exactly one of assignee_id or cohort_id must be provided".to_string(),
        )),
    }
}

/// 查找活跃任务，已软删除的任务视为不存在
async fn find_active_task<T: TaskRepository>(
    task_repo: &T,
    task_id: Uuid,
) -> Result<Task, AppError> {
    let task = task_repo
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task".to_string()))?;
    if !task.active {
        return Err(AppError::NotFound("Task".to_string()));
    }
    Ok(task)
}

/// 检查任务对用户是否可见
///
/// 管理角色可见全部任务；实习生仅可见分配给自己或
/// 自己班组的任务。
fn ensure_visible(task: &Task, user: &CurrentUser) -> Result<(), AppError> {
    if user.role.can_manage_tasks() {
        return Ok(());
    }
    let assigned = task.assignment.assignee_id() == Some(user.id)
        || (task.assignment.cohort_id().is_some()
            && task.assignment.cohort_id() == user.cohort_id);
    if assigned {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "task is not assigned to you".to_string(),
        ))
    }
}

/// 创建任务
///
/// 仅管理角色可调用。缺失的必填字段收集后一次性返回。
pub async fn create_task<T: TaskRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(settings): Extension<Arc<Settings>>,
    user: CurrentUser,
    Json(request): Json<CreateTaskRequestDto>,
) -> Result<(StatusCode, Json<TaskResponseDto>), AppError> {
    user.require_task_manager()?;
    request
        .validate()
        .map_err(AppError::from_validation_errors)?;

    let mut missing = Vec::new();
    if request.title.is_none() {
        missing.push("title");
    }
    if request.description.is_none() {
        missing.push("description");
    }
    if request.category.is_none() {
        missing.push("category");
    }
    if request.due_date.is_none() {
        missing.push("due_date");
    }
    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }

    let assignment = assignment_from_fields(request.assignee_id, request.cohort_id)?;

    let mut task = Task::new(
        request.title.unwrap_or_default(),
        request.description.unwrap_or_default(),
        request.category.unwrap_or_default(),
        request.priority.unwrap_or_default(),
        assignment,
        request.points,
        settings.scoring.default_task_points,
        request.due_date.unwrap_or_else(|| Utc::now().into()),
        user.id,
    )?;

    if let Some(titles) = request.subtasks {
        task.subtasks = titles
            .into_iter()
            .map(|title| Subtask {
                id: Uuid::new_v4(),
                title,
                done: false,
            })
            .collect();
    }

    let created = task_repo.create(&task).await?;
    tracing::info!(task_id = %created.id, "Task created");

    Ok((
        StatusCode::CREATED,
        Json(TaskResponseDto {
            success: true,
            task: created,
        }),
    ))
}

/// 查询单个任务
pub async fn get_task<T: TaskRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
) -> Result<Json<TaskResponseDto>, AppError> {
    let task = find_active_task(task_repo.as_ref(), task_id).await?;
    ensure_visible(&task, &user)?;

    Ok(Json(TaskResponseDto {
        success: true,
        task,
    }))
}

/// 查询任务列表
///
/// 实习生看到自己的任务（个人分配及班组分配），
/// 管理角色看到全部活跃任务。
pub async fn list_tasks<T: TaskRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    user: CurrentUser,
) -> Result<Json<TaskListResponseDto>, AppError> {
    let tasks = if user.role.can_manage_tasks() {
        task_repo.list_all().await?
    } else {
        task_repo.list_for_intern(user.id, user.cohort_id).await?
    };

    Ok(Json(TaskListResponseDto {
        success: true,
        tasks,
    }))
}

/// 更新任务
///
/// 仅管理角色可调用，所有字段可选。更换分配方式时旧
/// 方式的字段随判别联合一并消失。
pub async fn update_task<T: TaskRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequestDto>,
) -> Result<Json<TaskResponseDto>, AppError> {
    user.require_task_manager()?;
    request
        .validate()
        .map_err(AppError::from_validation_errors)?;

    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;

    if let Some(title) = request.title {
        task.title = title;
    }
    if let Some(description) = request.description {
        task.description = description;
    }
    if let Some(category) = request.category {
        task.category = category;
    }
    if let Some(priority) = request.priority {
        task.priority = priority;
    }
    if let Some(points) = request.points {
        task.points = points;
    }
    if let Some(due_date) = request.due_date {
        task.due_date = due_date;
    }
    if request.assignee_id.is_some() || request.cohort_id.is_some() {
        let assignment = assignment_from_fields(request.assignee_id, request.cohort_id)?;
        task.reassign(assignment);
    }
    task.updated_at = Utc::now().into();

    let updated = task_repo.update(&task).await?;

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    }))
}

/// 更新完成百分比
///
/// 实习生更新自己的进度记录（缺失时惰性创建），个人分配
/// 的任务同步更新任务自身状态。管理角色直接调整任务级
/// 进度。百分比越界时在任何写入发生前返回验证错误。
pub async fn update_progress<T: TaskRepository, P: TaskProgressRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(request): Json<UpdateProgressRequestDto>,
) -> Result<Response, AppError> {
    request
        .validate()
        .map_err(AppError::from_validation_errors)?;
    let progress = request
        .progress
        .ok_or_else(|| AppError::missing_fields(&["progress"]))?;

    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    ensure_visible(&task, &user)?;

    if user.is_intern() {
        let record = match progress_repo.find_by_pair(task_id, user.id).await? {
            Some(mut record) => {
                record.apply_progress(progress, task.points)?;
                progress_repo.update(&record).await?
            }
            None => {
                let mut record = TaskProgress::new(task_id, user.id);
                record.apply_progress(progress, task.points)?;
                progress_repo.create(&record).await?
            }
        };

        // 个人分配的任务与进度记录保持同步
        if task.assignment.assignee_id() == Some(user.id) {
            task.apply_progress(progress)?;
            task_repo.update(&task).await?;
        }

        return Ok(Json(ProgressRecordResponseDto {
            success: true,
            record,
        })
        .into_response());
    }

    user.require_task_manager()?;
    task.apply_progress(progress)?;
    let updated = task_repo.update(&task).await?;

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    })
    .into_response())
}

/// 标记任务完成
///
/// 实习生完成自己的进度记录并按任务积分计分；管理角色
/// 标记任务自身完成，记录完成者。
pub async fn complete_task<T: TaskRepository, P: TaskProgressRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    ensure_visible(&task, &user)?;

    if user.is_intern() {
        let record = match progress_repo.find_by_pair(task_id, user.id).await? {
            Some(mut record) => {
                record.complete(task.points)?;
                progress_repo.update(&record).await?
            }
            None => {
                let mut record = TaskProgress::new(task_id, user.id);
                record.complete(task.points)?;
                progress_repo.create(&record).await?
            }
        };

        if task.assignment.assignee_id() == Some(user.id) {
            task.complete(user.id)?;
            task_repo.update(&task).await?;
        }

        return Ok(Json(ProgressRecordResponseDto {
            success: true,
            record,
        })
        .into_response());
    }

    user.require_task_manager()?;
    task.complete(user.id)?;
    let updated = task_repo.update(&task).await?;

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    })
    .into_response())
}

/// 提交工作成果
///
/// 提交URL必填。实习生的提交进入自己的进度记录并转入
/// 待审核；个人分配的任务同步转入待审核。
pub async fn submit_task<T: TaskRepository, P: TaskProgressRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(request): Json<SubmitRequestDto>,
) -> Result<Response, AppError> {
    request
        .validate()
        .map_err(AppError::from_validation_errors)?;
    let url = request
        .url
        .ok_or_else(|| AppError::missing_fields(&["url"]))?;

    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    ensure_visible(&task, &user)?;

    if user.is_intern() {
        let record = match progress_repo.find_by_pair(task_id, user.id).await? {
            Some(mut record) => {
                record.submit(url.clone(), request.note.clone())?;
                progress_repo.update(&record).await?
            }
            None => {
                let mut record = TaskProgress::new(task_id, user.id);
                record.submit(url.clone(), request.note.clone())?;
                progress_repo.create(&record).await?
            }
        };

        if task.assignment.assignee_id() == Some(user.id) {
            task.submit(Submission {
                url,
                note: request.note,
                submitted_by: user.id,
                submitted_at: Utc::now().into(),
            })?;
            task_repo.update(&task).await?;
        }

        return Ok(Json(ProgressRecordResponseDto {
            success: true,
            record,
        })
        .into_response());
    }

    task.submit(Submission {
        url,
        note: request.note,
        submitted_by: user.id,
        submitted_at: Utc::now().into(),
    })?;
    let updated = task_repo.update(&task).await?;

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    })
    .into_response())
}

/// 勾选或取消勾选子任务
///
/// 完成度从子任务勾选状态重新推导：全部勾选时任务完成，
/// 取消勾选会使任务从已完成回退到进行中。
pub async fn update_subtask<T: TaskRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    user: CurrentUser,
    Path((task_id, subtask_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<SubtaskUpdateRequestDto>,
) -> Result<Json<TaskResponseDto>, AppError> {
    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    ensure_visible(&task, &user)?;

    task.set_subtask(subtask_id, request.done)?;
    let updated = task_repo.update(&task).await?;

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    }))
}

/// 追加评论
pub async fn add_comment<T: TaskRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(request): Json<CommentRequestDto>,
) -> Result<Json<TaskResponseDto>, AppError> {
    request
        .validate()
        .map_err(AppError::from_validation_errors)?;
    let body = request
        .body
        .ok_or_else(|| AppError::missing_fields(&["body"]))?;

    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    ensure_visible(&task, &user)?;

    task.add_comment(user.id, body)?;
    let updated = task_repo.update(&task).await?;

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    }))
}

/// 追加工时记录
///
/// 记录进入任务的工时序列；实习生的工时同时计入自己的
/// 进度记录，驱动概览中的工时汇总。
pub async fn add_time_log<T: TaskRepository, P: TaskProgressRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
    Json(request): Json<TimeLogRequestDto>,
) -> Result<Json<TaskResponseDto>, AppError> {
    request
        .validate()
        .map_err(AppError::from_validation_errors)?;
    let minutes = request
        .minutes
        .ok_or_else(|| AppError::missing_fields(&["minutes"]))?;

    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    ensure_visible(&task, &user)?;

    task.add_time_log(user.id, minutes, request.note.clone())?;
    let updated = task_repo.update(&task).await?;

    if user.is_intern() {
        match progress_repo.find_by_pair(task_id, user.id).await? {
            Some(mut record) => {
                record.add_time_log(minutes, request.note)?;
                progress_repo.update(&record).await?;
            }
            None => {
                let mut record = TaskProgress::new(task_id, user.id);
                record.add_time_log(minutes, request.note)?;
                progress_repo.create(&record).await?;
            }
        }
    }

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    }))
}

/// 取消任务
///
/// 仅管理员可调用。取消随任务传播到全部进度记录，
/// 已获积分一并清除。
pub async fn cancel_task<T: TaskRepository, P: TaskProgressRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
) -> Result<Json<TaskResponseDto>, AppError> {
    user.require_admin()?;

    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    task.cancel()?;
    let updated = task_repo.update(&task).await?;

    for mut record in progress_repo.find_by_task(task_id).await? {
        record.cancel();
        progress_repo.update(&record).await?;
    }
    tracing::info!(task_id = %task_id, "Task cancelled");

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    }))
}

/// 软删除任务
///
/// 仅管理角色可调用。任务从列表与聚合中消失，记录
/// 操作者与时间以便审计。
pub async fn delete_task<T: TaskRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
) -> Result<Json<OperationResponseDto>, AppError> {
    user.require_task_manager()?;

    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    task.soft_delete(user.id);
    task_repo.update(&task).await?;
    tracing::info!(task_id = %task_id, "Task soft-deleted");

    Ok(Json(OperationResponseDto { success: true }))
}

/// 启动任务
///
/// 被分配的实习生显式开始任务
pub async fn start_task<T: TaskRepository>(
    Extension(task_repo): Extension<Arc<T>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
) -> Result<Json<TaskResponseDto>, AppError> {
    let mut task = find_active_task(task_repo.as_ref(), task_id).await?;
    ensure_visible(&task, &user)?;

    if task.status == TaskStatus::Draft && !user.role.can_manage_tasks() {
        return Err(AppError::Forbidden(
            "draft tasks can only be started by a manager".to_string(),
        ));
    }

    task.start()?;
    let updated = task_repo.update(&task).await?;

    Ok(Json(TaskResponseDto {
        success: true,
        task: updated,
    }))
}
