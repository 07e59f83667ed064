// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 集成测试辅助设施
//!
//! 提供内存仓库实现与组装好的测试服务器。当前用户经由
//! 请求扩展直接注入，不经过会话中间件。

use async_trait::async_trait;
use axum::{
    routing::{get, patch, post},
    Extension, Router,
};
use axum_test::TestServer;
use chrono::{NaiveDate, Utc};
use internlink::config::settings::{
    AttendanceSettings, DatabaseSettings, GitLabSettings, ScoringSettings, ServerSettings, Settings,
};
use internlink::domain::models::attendance::Attendance;
use internlink::domain::models::task::{Assignment, Task, TaskPriority};
use internlink::domain::models::task_progress::TaskProgress;
use internlink::domain::models::user::{Role, User};
use internlink::domain::repositories::attendance_repository::AttendanceRepository;
use internlink::domain::repositories::task_progress_repository::TaskProgressRepository;
use internlink::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use internlink::domain::repositories::user_repository::{InternScope, UserRepository};
use internlink::domain::repositories::vcs_metrics::{NoopVcsMetrics, VcsMetrics};
use internlink::presentation::extractors::current_user::CurrentUser;
use internlink::presentation::handlers::{
    attendance_handler, leaderboard_handler, milestone_handler, progress_handler, task_handler,
    user_handler,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// 内存任务仓库
#[derive(Default)]
pub struct MockTaskRepository {
    tasks: Mutex<Vec<Task>>,
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError> {
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn update(&self, task: &Task) -> Result<Task, RepositoryError> {
        let mut tasks = self.tasks.lock().unwrap();
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = task.clone();
        Ok(task.clone())
    }

    async fn list_for_intern(
        &self,
        intern_id: Uuid,
        cohort_id: Option<Uuid>,
    ) -> Result<Vec<Task>, RepositoryError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| {
                t.active
                    && (t.assignment.assignee_id() == Some(intern_id)
                        || (cohort_id.is_some() && t.assignment.cohort_id() == cohort_id))
            })
            .cloned()
            .collect())
    }

    async fn list_by_cohort(&self, cohort_id: Uuid) -> Result<Vec<Task>, RepositoryError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.active && t.assignment.cohort_id() == Some(cohort_id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Task>, RepositoryError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.active)
            .cloned()
            .collect())
    }
}

/// 内存进度仓库
#[derive(Default)]
pub struct MockProgressRepository {
    records: Mutex<Vec<TaskProgress>>,
    fail_intern: Mutex<Option<Uuid>>,
}

impl MockProgressRepository {
    /// 直接读取当前记录，供断言使用
    pub fn snapshot(&self) -> Vec<TaskProgress> {
        self.records.lock().unwrap().clone()
    }

    /// 让针对指定实习生的插入失败，模拟单条写入错误
    pub fn fail_insert_for(&self, intern_id: Uuid) {
        *self.fail_intern.lock().unwrap() = Some(intern_id);
    }
}

#[async_trait]
impl TaskProgressRepository for MockProgressRepository {
    async fn find_by_pair(
        &self,
        task_id: Uuid,
        intern_id: Uuid,
    ) -> Result<Option<TaskProgress>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.task_id == task_id && r.intern_id == intern_id)
            .cloned())
    }

    async fn find_by_task(&self, task_id: Uuid) -> Result<Vec<TaskProgress>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn find_by_intern(&self, intern_id: Uuid) -> Result<Vec<TaskProgress>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.intern_id == intern_id)
            .cloned()
            .collect())
    }

    async fn find_by_interns(
        &self,
        intern_ids: &[Uuid],
    ) -> Result<Vec<TaskProgress>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| intern_ids.contains(&r.intern_id))
            .cloned()
            .collect())
    }

    async fn create(&self, record: &TaskProgress) -> Result<TaskProgress, RepositoryError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &TaskProgress) -> Result<TaskProgress, RepositoryError> {
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = record.clone();
        Ok(record.clone())
    }

    async fn insert_if_absent(&self, record: &TaskProgress) -> Result<bool, RepositoryError> {
        if *self.fail_intern.lock().unwrap() == Some(record.intern_id) {
            return Err(RepositoryError::Conflict(
                "insert rejected for this intern".to_string(),
            ));
        }
        let mut records = self.records.lock().unwrap();
        let exists = records
            .iter()
            .any(|r| r.task_id == record.task_id && r.intern_id == record.intern_id);
        if exists {
            return Ok(false);
        }
        records.push(record.clone());
        Ok(true)
    }
}

/// 内存用户仓库
#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = user.clone();
        Ok(user.clone())
    }

    async fn list_interns(&self, scope: InternScope) -> Result<Vec<User>, RepositoryError> {
        let mut interns: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.active && u.role == Role::Intern)
            .filter(|u| match scope {
                InternScope::College(college_id) => u.college_id == Some(college_id),
                InternScope::Cohort(cohort_id) => u.cohort_id == Some(cohort_id),
                InternScope::Global => true,
            })
            .cloned()
            .collect();
        interns.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(interns)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.active = false;
        Ok(())
    }

    async fn purge(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// 内存考勤仓库
#[derive(Default)]
pub struct MockAttendanceRepository {
    records: Mutex<Vec<Attendance>>,
}

#[async_trait]
impl AttendanceRepository for MockAttendanceRepository {
    async fn find_by_user_and_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Attendance>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.date == date)
            .cloned())
    }

    async fn create(&self, record: &Attendance) -> Result<Attendance, RepositoryError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &Attendance) -> Result<Attendance, RepositoryError> {
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = record.clone();
        Ok(record.clone())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Attendance>, RepositoryError> {
        let mut records: Vec<Attendance> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    async fn count_present_days(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        use internlink::domain::models::attendance::AttendanceStatus;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                r.user_id == user_id
                    && matches!(r.status, AttendanceStatus::Present | AttendanceStatus::Late)
            })
            .count() as u64)
    }
}

/// 测试配置：全部阈值取默认值
pub fn test_settings() -> Settings {
    Settings {
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: None,
            min_connections: None,
            connect_timeout: None,
            idle_timeout: None,
        },
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        attendance: AttendanceSettings {
            workday_start_hour: 9,
            grace_minutes: 15,
            full_day_hours: 8.0,
            half_day_hours: 4.0,
            short_session_status: "present".to_string(),
        },
        scoring: ScoringSettings {
            default_task_points: 10,
        },
        gitlab: GitLabSettings::default(),
    }
}

/// 组装好的测试应用
pub struct TestApp {
    pub server: TestServer,
    pub task_repo: Arc<MockTaskRepository>,
    pub progress_repo: Arc<MockProgressRepository>,
    pub user_repo: Arc<MockUserRepository>,
    pub attendance_repo: Arc<MockAttendanceRepository>,
}

/// 以给定的当前用户组装测试服务器
///
/// 路由与生产配置一致，仓库替换为内存实现
pub fn spawn_app(current_user: CurrentUser) -> TestApp {
    let task_repo = Arc::new(MockTaskRepository::default());
    let progress_repo = Arc::new(MockProgressRepository::default());
    let user_repo = Arc::new(MockUserRepository::default());
    let attendance_repo = Arc::new(MockAttendanceRepository::default());
    let vcs: Arc<dyn VcsMetrics> = Arc::new(NoopVcsMetrics);

    let app = Router::new()
        .route(
            "/v1/tasks",
            post(task_handler::create_task::<MockTaskRepository>)
                .get(task_handler::list_tasks::<MockTaskRepository>),
        )
        .route(
            "/v1/tasks/{id}",
            get(task_handler::get_task::<MockTaskRepository>)
                .patch(task_handler::update_task::<MockTaskRepository>)
                .delete(task_handler::delete_task::<MockTaskRepository>),
        )
        .route(
            "/v1/tasks/{id}/progress",
            patch(task_handler::update_progress::<MockTaskRepository, MockProgressRepository>),
        )
        .route(
            "/v1/tasks/{id}/complete",
            post(task_handler::complete_task::<MockTaskRepository, MockProgressRepository>),
        )
        .route(
            "/v1/tasks/{id}/submit",
            post(task_handler::submit_task::<MockTaskRepository, MockProgressRepository>),
        )
        .route(
            "/v1/tasks/{id}/subtasks/{subtask_id}",
            patch(task_handler::update_subtask::<MockTaskRepository>),
        )
        .route(
            "/v1/tasks/{id}/progress-overview",
            get(progress_handler::progress_overview::<
                MockTaskRepository,
                MockProgressRepository,
                MockUserRepository,
            >),
        )
        .route(
            "/v1/admin/task-progress",
            post(progress_handler::initialize_progress::<
                MockTaskRepository,
                MockProgressRepository,
                MockUserRepository,
            >),
        )
        .route(
            "/v1/leaderboard",
            get(leaderboard_handler::leaderboard::<
                MockTaskRepository,
                MockProgressRepository,
                MockUserRepository,
            >),
        )
        .route(
            "/v1/milestones",
            get(milestone_handler::milestones::<
                MockTaskRepository,
                MockProgressRepository,
                MockUserRepository,
                MockAttendanceRepository,
            >),
        )
        .route(
            "/v1/attendance",
            get(attendance_handler::list_attendance::<MockAttendanceRepository>),
        )
        .route(
            "/v1/attendance/check-in",
            post(attendance_handler::check_in::<MockAttendanceRepository>),
        )
        .route(
            "/v1/attendance/check-out",
            post(attendance_handler::check_out::<MockAttendanceRepository>),
        )
        .route(
            "/v1/users",
            post(user_handler::create_user::<MockUserRepository>),
        )
        .layer(Extension(task_repo.clone()))
        .layer(Extension(progress_repo.clone()))
        .layer(Extension(user_repo.clone()))
        .layer(Extension(attendance_repo.clone()))
        .layer(Extension(vcs))
        .layer(Extension(Arc::new(test_settings())))
        .layer(Extension(current_user));

    TestApp {
        server: TestServer::new(app).expect("test server"),
        task_repo,
        progress_repo,
        user_repo,
        attendance_repo,
    }
}

/// 构造一个实习生身份的当前用户
pub fn intern_identity(cohort_id: Option<Uuid>) -> CurrentUser {
    CurrentUser {
        id: Uuid::new_v4(),
        username: "intern-zhang".to_string(),
        display_name: "Zhang San".to_string(),
        role: Role::Intern,
        college_id: Some(Uuid::new_v4()),
        cohort_id,
    }
}

/// 构造一个管理员身份的当前用户
pub fn admin_identity() -> CurrentUser {
    CurrentUser {
        id: Uuid::new_v4(),
        username: "admin".to_string(),
        display_name: "Admin".to_string(),
        role: Role::Admin,
        college_id: Some(Uuid::new_v4()),
        cohort_id: None,
    }
}

/// 创建并登记一个实习生账号
pub async fn seed_intern(
    app: &TestApp,
    username: &str,
    college_id: Option<Uuid>,
    cohort_id: Option<Uuid>,
) -> User {
    let mut user = User::new(
        username.to_string(),
        format!("provider-{username}"),
        format!("{username}@example.com"),
        username.to_string(),
        Role::Intern,
    );
    user.college_id = college_id;
    user.cohort_id = cohort_id;
    app.user_repo.create(&user).await.expect("seed intern")
}

/// 创建并登记一个班组任务
pub async fn seed_cohort_task(app: &TestApp, cohort_id: Uuid, points: i32) -> Task {
    let task = Task::new(
        "Implement API pagination".to_string(),
        "Add cursor pagination to the list endpoints".to_string(),
        "backend".to_string(),
        TaskPriority::Medium,
        Assignment::Cohort(cohort_id),
        Some(points),
        10,
        Utc::now().into(),
        Uuid::new_v4(),
    )
    .expect("valid task");
    app.task_repo.create(&task).await.expect("seed task")
}

/// 创建并登记一个个人任务
pub async fn seed_individual_task(app: &TestApp, assignee_id: Uuid, points: i32) -> Task {
    let task = Task::new(
        "Write onboarding notes".to_string(),
        "Summarize the first week".to_string(),
        "docs".to_string(),
        TaskPriority::Low,
        Assignment::Individual(assignee_id),
        Some(points),
        10,
        Utc::now().into(),
        Uuid::new_v4(),
    )
    .expect("valid task");
    app.task_repo.create(&task).await.expect("seed task")
}
