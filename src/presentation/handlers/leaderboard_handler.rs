// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::leaderboard::{LeaderboardQueryDto, LeaderboardResponseDto};
use crate::domain::models::task_progress::TaskProgress;
use crate::domain::repositories::task_progress_repository::TaskProgressRepository;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::domain::repositories::user_repository::{InternScope, UserRepository};
use crate::domain::services::scoring::{rank_leaderboard, InternScore, TaskRecord};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::CurrentUser;
use axum::{
    extract::{Extension, Query},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// 从查询参数解析排行榜范围
///
/// 缺省为学院范围。范围归属取自发起请求的用户。
fn resolve_scope(scope: Option<&str>, user: &CurrentUser) -> Result<(String, InternScope), AppError> {
    match scope.unwrap_or("college") {
        "college" => {
            let college_id = user.college_id.ok_or_else(|| {
                AppError::Validation("User does not belong to a college".to_string())
            })?;
            Ok(("college".to_string(), InternScope::College(college_id)))
        }
        "cohort" => {
            let cohort_id = user.cohort_id.ok_or_else(|| {
                AppError::Validation("User does not belong to a cohort".to_string())
            })?;
            Ok(("cohort".to_string(), InternScope::Cohort(cohort_id)))
        }
        "global" => Ok(("global".to_string(), InternScope::Global)),
        other => Err(AppError::Validation(format!(
            "Unknown leaderboard scope: {other}"
        ))),
    }
}

/// 排行榜
///
/// 对范围内每个实习生，以其可见任务为记录全集（无进度
/// 记录的任务计为未开始），统一的完成判定与计分规则得出
/// 积分与完成数，名次为1..N的排列。
pub async fn leaderboard<T, P, U>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    Extension(user_repo): Extension<Arc<U>>,
    user: CurrentUser,
    Query(query): Query<LeaderboardQueryDto>,
) -> Result<Json<LeaderboardResponseDto>, AppError>
where
    T: TaskRepository,
    P: TaskProgressRepository,
    U: UserRepository,
{
    let (scope_name, scope) = resolve_scope(query.scope.as_deref(), &user)?;

    let interns = user_repo.list_interns(scope).await?;
    let intern_ids: Vec<Uuid> = interns.iter().map(|intern| intern.id).collect();

    let records: HashMap<(Uuid, Uuid), TaskProgress> = progress_repo
        .find_by_interns(&intern_ids)
        .await?
        .into_iter()
        .map(|record| ((record.task_id, record.intern_id), record))
        .collect();

    let mut scores = Vec::with_capacity(interns.len());
    for intern in interns {
        let tasks = task_repo.list_for_intern(intern.id, intern.cohort_id).await?;
        let task_records = tasks
            .iter()
            .map(|task| match records.get(&(task.id, intern.id)) {
                Some(record) => TaskRecord {
                    task_points: task.points,
                    status: record.status,
                    progress: record.progress,
                },
                None => TaskRecord {
                    task_points: task.points,
                    status: Default::default(),
                    progress: 0,
                },
            })
            .collect();

        scores.push(InternScore {
            user_id: intern.id,
            username: intern.username,
            display_name: intern.display_name,
            records: task_records,
        });
    }

    let leaderboard = rank_leaderboard(scores, user.id);

    Ok(Json(LeaderboardResponseDto {
        success: true,
        scope: scope_name,
        leaderboard,
    }))
}
