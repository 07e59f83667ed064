// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{Role, User};
use crate::domain::repositories::task_repository::RepositoryError;
use crate::domain::repositories::user_repository::{InternScope, UserRepository};
use crate::infrastructure::database::entities::{
    attendance as attendance_entity, session as session_entity, task as task_entity,
    task_progress as progress_entity, user as user_entity,
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

/// 用户仓库实现
///
/// 基于SeaORM实现的用户数据访问层
#[derive(Clone)]
pub struct UserRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的用户仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user_entity::Model> for User {
    fn from(model: user_entity::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            provider_id: model.provider_id,
            email: model.email,
            display_name: model.display_name,
            role: model.role.parse().unwrap_or_default(),
            college_id: model.college_id,
            cohort_id: model.cohort_id,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&User> for user_entity::ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: Set(user.id),
            username: Set(user.username.clone()),
            provider_id: Set(user.provider_id.clone()),
            email: Set(user.email.clone()),
            display_name: Set(user.display_name.clone()),
            role: Set(user.role.to_string()),
            college_id: Set(user.college_id),
            cohort_id: Set(user.cohort_id),
            active: Set(user.active),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let model: user_entity::ActiveModel = user.into();

        model.insert(self.db.as_ref()).await?;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find()
            .filter(user_entity::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let model: user_entity::ActiveModel = user.into();

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn list_interns(&self, scope: InternScope) -> Result<Vec<User>, RepositoryError> {
        let mut condition = Condition::all()
            .add(user_entity::Column::Role.eq(Role::Intern.to_string()))
            .add(user_entity::Column::Active.eq(true));

        condition = match scope {
            InternScope::College(college_id) => {
                condition.add(user_entity::Column::CollegeId.eq(college_id))
            }
            InternScope::Cohort(cohort_id) => {
                condition.add(user_entity::Column::CohortId.eq(cohort_id))
            }
            InternScope::Global => condition,
        };

        let models = user_entity::Entity::find()
            .filter(condition)
            .order_by_asc(user_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut active: user_entity::ActiveModel = model.into();
        active.active = Set(false);
        active.updated_at = Set(Utc::now().into());
        active.update(self.db.as_ref()).await?;
        Ok(())
    }

    async fn purge(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        user_entity::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        progress_entity::Entity::delete_many()
            .filter(progress_entity::Column::InternId.eq(id))
            .exec(&txn)
            .await?;

        attendance_entity::Entity::delete_many()
            .filter(attendance_entity::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        task_entity::Entity::delete_many()
            .filter(
                Condition::any()
                    .add(task_entity::Column::CreatedBy.eq(id))
                    .add(task_entity::Column::AssigneeId.eq(id)),
            )
            .exec(&txn)
            .await?;

        session_entity::Entity::delete_many()
            .filter(session_entity::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        user_entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
