// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::progress_request::{
    BulkInitializeResponseDto, InitializeProgressRequestDto, InternInfoDto,
    ProgressOverviewEntryDto, ProgressOverviewResponseDto,
};
use crate::domain::models::task::Assignment;
use crate::domain::models::task_progress::TaskProgress;
use crate::domain::repositories::task_progress_repository::TaskProgressRepository;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::domain::repositories::user_repository::{InternScope, UserRepository};
use crate::domain::services::scoring::{sort_overview, summarize, ProgressSnapshot};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::CurrentUser;
use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// 进度管理操作的查询参数
#[derive(Debug, Deserialize)]
pub struct ProgressActionQuery {
    /// 操作名：initialize-progress或bulk-initialize
    pub action: Option<String>,
}

/// 任务进度概览
///
/// 返回任务范围内每个实习生的进度快照。无进度记录的
/// 实习生合成为"未开始/0%"，保证概览覆盖全部应出现的
/// 实习生。按状态优先级降序、完成百分比降序排序。
pub async fn progress_overview<T, P, U>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    Extension(user_repo): Extension<Arc<U>>,
    user: CurrentUser,
    Path(task_id): Path<Uuid>,
) -> Result<Json<ProgressOverviewResponseDto>, AppError>
where
    T: TaskRepository,
    P: TaskProgressRepository,
    U: UserRepository,
{
    user.require_task_manager()?;

    let task = task_repo
        .find_by_id(task_id)
        .await?
        .filter(|t| t.active)
        .ok_or_else(|| AppError::NotFound("Task".to_string()))?;

    let interns = match task.assignment {
        Assignment::Cohort(cohort_id) => {
            user_repo.list_interns(InternScope::Cohort(cohort_id)).await?
        }
        Assignment::Individual(assignee_id) => user_repo
            .find_by_id(assignee_id)
            .await?
            .into_iter()
            .collect(),
    };

    let records: HashMap<Uuid, TaskProgress> = progress_repo
        .find_by_task(task_id)
        .await?
        .into_iter()
        .map(|record| (record.intern_id, record))
        .collect();

    let mut snapshots: Vec<ProgressSnapshot> = interns
        .iter()
        .map(|intern| ProgressSnapshot::from_record(intern.id, records.get(&intern.id)))
        .collect();
    sort_overview(&mut snapshots);

    let summary = summarize(&snapshots);

    let mut intern_info: HashMap<Uuid, InternInfoDto> = interns
        .into_iter()
        .map(|intern| {
            (
                intern.id,
                InternInfoDto {
                    id: intern.id,
                    username: intern.username,
                    display_name: intern.display_name,
                },
            )
        })
        .collect();

    let progress_overview = snapshots
        .into_iter()
        .filter_map(|snapshot| {
            intern_info
                .remove(&snapshot.intern_id)
                .map(|intern| ProgressOverviewEntryDto { intern, snapshot })
        })
        .collect();

    Ok(Json(ProgressOverviewResponseDto {
        success: true,
        task_id,
        summary,
        progress_overview,
    }))
}

/// 进度初始化入口
///
/// `action=initialize-progress`针对单个（任务，实习生）对。
/// `action=bulk-initialize`的目标集合按优先级取自显式实习生
/// ID列表、请求中的班组ID、任务自身的班组分配。两者都是幂等
/// 操作：存在性由数据库唯一索引仲裁，重复调用只会把记录计入
/// existing而不会新建或覆盖。批量插入尽力而为，单条失败记入
/// skipped并继续处理其余目标。
pub async fn initialize_progress<T, P, U>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    Extension(user_repo): Extension<Arc<U>>,
    user: CurrentUser,
    Query(query): Query<ProgressActionQuery>,
    Json(request): Json<InitializeProgressRequestDto>,
) -> Result<Json<BulkInitializeResponseDto>, AppError>
where
    T: TaskRepository,
    P: TaskProgressRepository,
    U: UserRepository,
{
    user.require_task_manager()?;

    let action = query
        .action
        .ok_or_else(|| AppError::missing_fields(&["action"]))?;
    let task_id = request
        .task_id
        .ok_or_else(|| AppError::missing_fields(&["task_id"]))?;

    let task = task_repo
        .find_by_id(task_id)
        .await?
        .filter(|t| t.active)
        .ok_or_else(|| AppError::NotFound("Task".to_string()))?;

    match action.as_str() {
        "initialize-progress" => {
            let intern_id = request
                .intern_id
                .ok_or_else(|| AppError::missing_fields(&["intern_id"]))?;

            let record = TaskProgress::new(task_id, intern_id);
            let created = progress_repo.insert_if_absent(&record).await?;

            Ok(Json(BulkInitializeResponseDto {
                success: true,
                created: usize::from(created),
                existing: usize::from(!created),
                skipped: Vec::new(),
                total: 1,
            }))
        }
        "bulk-initialize" => {
            let targets: Vec<Uuid> = if let Some(intern_ids) = request.intern_ids {
                intern_ids
            } else {
                let cohort_id = match (request.cohort_id, task.assignment) {
                    (Some(cohort_id), _) => cohort_id,
                    (None, Assignment::Cohort(cohort_id)) => cohort_id,
                    (None, Assignment::Individual(_)) => {
                        return Err(AppError::Validation(
                            "Bulk initialization requires intern_ids, a cohort_id, \
                             or a cohort-assigned task"
                                .to_string(),
                        ))
                    }
                };
                user_repo
                    .list_interns(InternScope::Cohort(cohort_id))
                    .await?
                    .into_iter()
                    .map(|intern| intern.id)
                    .collect()
            };

            let total = targets.len();
            let mut created = 0;
            let mut existing = 0;
            let mut skipped = Vec::new();
            for intern_id in targets {
                let record = TaskProgress::new(task_id, intern_id);
                match progress_repo.insert_if_absent(&record).await {
                    Ok(true) => created += 1,
                    Ok(false) => existing += 1,
                    Err(err) => {
                        tracing::warn!(
                            task_id = %task_id,
                            intern_id = %intern_id,
                            "Progress initialization skipped: {err}"
                        );
                        skipped.push(intern_id);
                    }
                }
            }
            tracing::info!(
                task_id = %task_id,
                created,
                existing,
                skipped = skipped.len(),
                "Bulk progress initialization finished"
            );

            Ok(Json(BulkInitializeResponseDto {
                success: true,
                created,
                existing,
                skipped,
                total,
            }))
        }
        other => Err(AppError::Validation(format!("Unknown action: {other}"))),
    }
}
