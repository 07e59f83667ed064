// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::attendance_repo_impl::AttendanceRepositoryImpl;
use crate::infrastructure::repositories::cohort_repo_impl::CohortRepositoryImpl;
use crate::infrastructure::repositories::task_progress_repo_impl::TaskProgressRepositoryImpl;
use crate::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use crate::presentation::handlers::{
    attendance_handler, cohort_handler, leaderboard_handler, milestone_handler, progress_handler,
    task_handler, user_handler,
};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let protected_routes = Router::new()
        .route(
            "/v1/tasks",
            post(task_handler::create_task::<TaskRepositoryImpl>)
                .get(task_handler::list_tasks::<TaskRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}",
            get(task_handler::get_task::<TaskRepositoryImpl>)
                .patch(task_handler::update_task::<TaskRepositoryImpl>)
                .delete(task_handler::delete_task::<TaskRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}/start",
            post(task_handler::start_task::<TaskRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}/progress",
            patch(
                task_handler::update_progress::<TaskRepositoryImpl, TaskProgressRepositoryImpl>,
            ),
        )
        .route(
            "/v1/tasks/{id}/complete",
            post(task_handler::complete_task::<TaskRepositoryImpl, TaskProgressRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}/submit",
            post(task_handler::submit_task::<TaskRepositoryImpl, TaskProgressRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}/subtasks/{subtask_id}",
            patch(task_handler::update_subtask::<TaskRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}/comments",
            post(task_handler::add_comment::<TaskRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}/time-logs",
            post(task_handler::add_time_log::<TaskRepositoryImpl, TaskProgressRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}/cancel",
            post(task_handler::cancel_task::<TaskRepositoryImpl, TaskProgressRepositoryImpl>),
        )
        .route(
            "/v1/tasks/{id}/progress-overview",
            get(progress_handler::progress_overview::<
                TaskRepositoryImpl,
                TaskProgressRepositoryImpl,
                UserRepositoryImpl,
            >),
        )
        .route(
            "/v1/admin/task-progress",
            post(progress_handler::initialize_progress::<
                TaskRepositoryImpl,
                TaskProgressRepositoryImpl,
                UserRepositoryImpl,
            >),
        )
        .route(
            "/v1/leaderboard",
            get(leaderboard_handler::leaderboard::<
                TaskRepositoryImpl,
                TaskProgressRepositoryImpl,
                UserRepositoryImpl,
            >),
        )
        .route(
            "/v1/milestones",
            get(milestone_handler::milestones::<
                TaskRepositoryImpl,
                TaskProgressRepositoryImpl,
                UserRepositoryImpl,
                AttendanceRepositoryImpl,
            >),
        )
        .route(
            "/v1/attendance",
            get(attendance_handler::list_attendance::<AttendanceRepositoryImpl>),
        )
        .route(
            "/v1/attendance/check-in",
            post(attendance_handler::check_in::<AttendanceRepositoryImpl>),
        )
        .route(
            "/v1/attendance/check-out",
            post(attendance_handler::check_out::<AttendanceRepositoryImpl>),
        )
        .route(
            "/v1/cohorts",
            get(cohort_handler::list_cohorts::<CohortRepositoryImpl>),
        )
        .route(
            "/v1/users",
            post(user_handler::create_user::<UserRepositoryImpl>),
        )
        .route(
            "/v1/users/{id}",
            get(user_handler::get_user::<UserRepositoryImpl>)
                .patch(user_handler::update_user::<UserRepositoryImpl>)
                .delete(user_handler::delete_user::<UserRepositoryImpl>),
        )
        .route(
            "/v1/users/{id}/purge",
            delete(user_handler::purge_user::<UserRepositoryImpl>),
        );

    Router::new().merge(public_routes).merge(protected_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
