// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 实习生选取范围
///
/// 排行榜与批量操作都以此为总体的定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternScope {
    /// 某学院内的全部实习生
    College(Uuid),
    /// 某班组内的全部实习生
    Cohort(Uuid),
    /// 全部实习生
    Global,
}

/// 用户仓库特质
///
/// 定义用户数据访问接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建新用户
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
    /// 根据ID查找用户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    /// 根据用户名查找用户
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    /// 更新用户
    async fn update(&self, user: &User) -> Result<User, RepositoryError>;
    /// 查找范围内的全部活跃实习生
    async fn list_interns(&self, scope: InternScope) -> Result<Vec<User>, RepositoryError>;
    /// 软删除用户（活跃标志置为false）
    async fn soft_delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 硬删除用户并级联清除其任务、进度与考勤记录
    ///
    /// 在单个事务内执行。仅由管理员的显式清除操作触发。
    async fn purge(&self, id: Uuid) -> Result<(), RepositoryError>;
}
