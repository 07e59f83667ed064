// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task_progress::TaskProgress;
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 任务进度仓库特质
///
/// 定义每（任务，实习生）对进度记录的数据访问接口
#[async_trait]
pub trait TaskProgressRepository: Send + Sync {
    /// 根据（任务，实习生）对查找进度记录
    async fn find_by_pair(
        &self,
        task_id: Uuid,
        intern_id: Uuid,
    ) -> Result<Option<TaskProgress>, RepositoryError>;
    /// 查找某任务的全部进度记录
    async fn find_by_task(&self, task_id: Uuid) -> Result<Vec<TaskProgress>, RepositoryError>;
    /// 查找某实习生的全部进度记录
    async fn find_by_intern(&self, intern_id: Uuid) -> Result<Vec<TaskProgress>, RepositoryError>;
    /// 查找一组实习生的全部进度记录（排行榜批量取数）
    async fn find_by_interns(
        &self,
        intern_ids: &[Uuid],
    ) -> Result<Vec<TaskProgress>, RepositoryError>;
    /// 创建进度记录
    async fn create(&self, record: &TaskProgress) -> Result<TaskProgress, RepositoryError>;
    /// 更新进度记录
    async fn update(&self, record: &TaskProgress) -> Result<TaskProgress, RepositoryError>;
    /// 幂等插入：记录已存在时不做任何修改
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 新记录已创建
    /// * `Ok(false)` - （任务，实习生）对已存在，未做修改
    async fn insert_if_absent(&self, record: &TaskProgress) -> Result<bool, RepositoryError>;
}
