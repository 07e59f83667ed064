// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::leaderboard::MilestonesResponseDto;
use crate::domain::repositories::attendance_repository::AttendanceRepository;
use crate::domain::repositories::task_progress_repository::TaskProgressRepository;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::repositories::vcs_metrics::VcsMetrics;
use crate::domain::services::milestones::{derive_achievements, MilestoneInputs};
use crate::domain::services::scoring::{completion_rate, is_completed};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::CurrentUser;
use axum::{extract::Extension, Json};
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// 里程碑视图
///
/// 从已有计数推导当前用户的成就列表：任务完成数与完成率
/// 来自进度记录（统一的完成判定），出勤天数来自考勤记录，
/// 提交数来自外部GitLab协作方。外部查询失败时回退为0并
/// 记录警告，不影响其余成就的推导。
pub async fn milestones<T, P, U, A>(
    Extension(task_repo): Extension<Arc<T>>,
    Extension(progress_repo): Extension<Arc<P>>,
    Extension(user_repo): Extension<Arc<U>>,
    Extension(attendance_repo): Extension<Arc<A>>,
    Extension(vcs): Extension<Arc<dyn VcsMetrics>>,
    user: CurrentUser,
) -> Result<Json<MilestonesResponseDto>, AppError>
where
    T: TaskRepository,
    P: TaskProgressRepository,
    U: UserRepository,
    A: AttendanceRepository,
{
    let account = user_repo
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    let tasks = task_repo.list_for_intern(user.id, user.cohort_id).await?;
    let visible: HashSet<Uuid> = tasks.iter().map(|task| task.id).collect();

    // 分子与分母取同一任务集合，软删除任务的记录不计入
    let records = progress_repo.find_by_intern(user.id).await?;
    let completed = records
        .iter()
        .filter(|record| {
            visible.contains(&record.task_id) && is_completed(record.status, record.progress)
        })
        .count();

    let attendance_days = attendance_repo.count_present_days(user.id).await?;

    let commit_count = match vcs.commit_count(&user.username).await {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(username = %user.username, "VCS metrics unavailable: {err}");
            0
        }
    };

    let inputs = MilestoneInputs {
        completed_tasks: completed as u64,
        commit_count,
        attendance_days,
        account_age_days: account.account_age_days(Utc::now().into()) as u64,
        completion_rate: completion_rate(completed, tasks.len()) as u64,
    };

    Ok(Json(MilestonesResponseDto {
        success: true,
        completed_tasks: inputs.completed_tasks,
        attendance_days,
        commit_count,
        achievements: derive_achievements(&inputs),
    }))
}
