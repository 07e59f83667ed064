// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task_progress::TaskProgress;
use crate::domain::repositories::task_progress_repository::TaskProgressRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::task_progress as progress_entity;
use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 任务进度仓库实现
///
/// 基于SeaORM实现的进度记录数据访问层
#[derive(Clone)]
pub struct TaskProgressRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TaskProgressRepositoryImpl {
    /// 创建新的任务进度仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<progress_entity::Model> for TaskProgress {
    fn from(model: progress_entity::Model) -> Self {
        Self {
            id: model.id,
            task_id: model.task_id,
            intern_id: model.intern_id,
            status: model.status.parse().unwrap_or_default(),
            progress: model.progress,
            points_earned: model.points_earned,
            submission_url: model.submission_url,
            submission_note: model.submission_note,
            time_logs: serde_json::from_value(model.time_logs).unwrap_or_default(),
            feedback: model.feedback,
            reviewed_by: model.reviewed_by,
            needs_help: model.needs_help,
            completed_at: model.completed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&TaskProgress> for progress_entity::ActiveModel {
    fn from(record: &TaskProgress) -> Self {
        Self {
            id: Set(record.id),
            task_id: Set(record.task_id),
            intern_id: Set(record.intern_id),
            status: Set(record.status.to_string()),
            progress: Set(record.progress),
            points_earned: Set(record.points_earned),
            submission_url: Set(record.submission_url.clone()),
            submission_note: Set(record.submission_note.clone()),
            time_logs: Set(serde_json::json!(record.time_logs)),
            feedback: Set(record.feedback.clone()),
            reviewed_by: Set(record.reviewed_by),
            needs_help: Set(record.needs_help),
            completed_at: Set(record.completed_at),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        }
    }
}

#[async_trait]
impl TaskProgressRepository for TaskProgressRepositoryImpl {
    async fn find_by_pair(
        &self,
        task_id: Uuid,
        intern_id: Uuid,
    ) -> Result<Option<TaskProgress>, RepositoryError> {
        let model = progress_entity::Entity::find()
            .filter(progress_entity::Column::TaskId.eq(task_id))
            .filter(progress_entity::Column::InternId.eq(intern_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_task(&self, task_id: Uuid) -> Result<Vec<TaskProgress>, RepositoryError> {
        let models = progress_entity::Entity::find()
            .filter(progress_entity::Column::TaskId.eq(task_id))
            .order_by_asc(progress_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_intern(&self, intern_id: Uuid) -> Result<Vec<TaskProgress>, RepositoryError> {
        let models = progress_entity::Entity::find()
            .filter(progress_entity::Column::InternId.eq(intern_id))
            .order_by_asc(progress_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_interns(
        &self,
        intern_ids: &[Uuid],
    ) -> Result<Vec<TaskProgress>, RepositoryError> {
        if intern_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = progress_entity::Entity::find()
            .filter(progress_entity::Column::InternId.is_in(intern_ids.iter().copied()))
            .order_by_asc(progress_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create(&self, record: &TaskProgress) -> Result<TaskProgress, RepositoryError> {
        let model: progress_entity::ActiveModel = record.into();

        model.insert(self.db.as_ref()).await?;
        Ok(record.clone())
    }

    async fn update(&self, record: &TaskProgress) -> Result<TaskProgress, RepositoryError> {
        let model: progress_entity::ActiveModel = record.into();

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn insert_if_absent(&self, record: &TaskProgress) -> Result<bool, RepositoryError> {
        let model: progress_entity::ActiveModel = record.into();

        // 唯一索引上的冲突即"已存在"，不修改现有记录
        let result = progress_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    progress_entity::Column::TaskId,
                    progress_entity::Column::InternId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(self.db.as_ref())
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
