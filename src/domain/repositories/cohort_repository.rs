// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::cohort::Cohort;
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 班组仓库特质
#[async_trait]
pub trait CohortRepository: Send + Sync {
    /// 根据ID查找班组
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cohort>, RepositoryError>;
    /// 查找全部活跃班组
    async fn list_active(&self) -> Result<Vec<Cohort>, RepositoryError>;
}
