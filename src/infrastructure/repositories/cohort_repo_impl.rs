// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::cohort::Cohort;
use crate::domain::repositories::cohort_repository::CohortRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::cohort as cohort_entity;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

/// 班组仓库实现
#[derive(Clone)]
pub struct CohortRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CohortRepositoryImpl {
    /// 创建新的班组仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<cohort_entity::Model> for Cohort {
    fn from(model: cohort_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            college_id: model.college_id,
            start_date: model.start_date,
            end_date: model.end_date,
            active: model.active,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl CohortRepository for CohortRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cohort>, RepositoryError> {
        let model = cohort_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list_active(&self) -> Result<Vec<Cohort>, RepositoryError> {
        let models = cohort_entity::Entity::find()
            .filter(cohort_entity::Column::Active.eq(true))
            .order_by_asc(cohort_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
