// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::Task;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一性冲突
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// 任务仓库特质
///
/// 定义任务数据访问接口
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 创建新任务
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError>;
    /// 根据ID查找任务（含已软删除的记录，由调用方判断活跃标志）
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError>;
    /// 更新任务
    async fn update(&self, task: &Task) -> Result<Task, RepositoryError>;
    /// 查找某实习生可见的全部活跃任务（个人分配或其班组分配）
    async fn list_for_intern(
        &self,
        intern_id: Uuid,
        cohort_id: Option<Uuid>,
    ) -> Result<Vec<Task>, RepositoryError>;
    /// 查找分配给某班组的全部活跃任务
    async fn list_by_cohort(&self, cohort_id: Uuid) -> Result<Vec<Task>, RepositoryError>;
    /// 查找全部活跃任务（管理视图）
    async fn list_all(&self) -> Result<Vec<Task>, RepositoryError>;
}
