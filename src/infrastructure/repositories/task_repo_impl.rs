// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{Assignment, Task};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::infrastructure::database::entities::task as task_entity;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 任务仓库实现
///
/// 基于SeaORM实现的任务数据访问层。分配方式的判别联合
/// 在此层展开为两个可空列，写入时保证互斥。
#[derive(Clone)]
pub struct TaskRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    /// 创建新的任务仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 从存储模型还原领域模型
///
/// 两个分配列都为空的行违反写入不变式，按数据损坏处理
fn task_from_model(model: task_entity::Model) -> Result<Task, RepositoryError> {
    let assignment = match (model.assignee_id, model.cohort_id) {
        (Some(assignee), _) => Assignment::Individual(assignee),
        (None, Some(cohort)) => Assignment::Cohort(cohort),
        (None, None) => {
            return Err(RepositoryError::Database(DbErr::Custom(format!(
                "task {} has neither assignee nor cohort",
                model.id
            ))))
        }
    };

    Ok(Task {
        id: model.id,
        title: model.title,
        description: model.description,
        status: model.status.parse().unwrap_or_default(),
        priority: model.priority.parse().unwrap_or_default(),
        category: model.category,
        assignment,
        points: model.points,
        due_date: model.due_date,
        progress: model.progress,
        subtasks: serde_json::from_value(model.subtasks).unwrap_or_default(),
        comments: serde_json::from_value(model.comments).unwrap_or_default(),
        time_logs: serde_json::from_value(model.time_logs).unwrap_or_default(),
        submissions: serde_json::from_value(model.submissions).unwrap_or_default(),
        created_by: model.created_by,
        completed_by: model.completed_by,
        completed_at: model.completed_at,
        active: model.active,
        deleted_by: model.deleted_by,
        deleted_at: model.deleted_at,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

impl From<&Task> for task_entity::ActiveModel {
    fn from(task: &Task) -> Self {
        Self {
            id: Set(task.id),
            title: Set(task.title.clone()),
            description: Set(task.description.clone()),
            status: Set(task.status.to_string()),
            priority: Set(task.priority.to_string()),
            category: Set(task.category.clone()),
            assignee_id: Set(task.assignment.assignee_id()),
            cohort_id: Set(task.assignment.cohort_id()),
            points: Set(task.points),
            due_date: Set(task.due_date),
            progress: Set(task.progress),
            subtasks: Set(serde_json::json!(task.subtasks)),
            comments: Set(serde_json::json!(task.comments)),
            time_logs: Set(serde_json::json!(task.time_logs)),
            submissions: Set(serde_json::json!(task.submissions)),
            created_by: Set(task.created_by),
            completed_by: Set(task.completed_by),
            completed_at: Set(task.completed_at),
            active: Set(task.active),
            deleted_by: Set(task.deleted_by),
            deleted_at: Set(task.deleted_at),
            created_at: Set(task.created_at),
            updated_at: Set(task.updated_at),
        }
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError> {
        let model: task_entity::ActiveModel = task.into();

        model.insert(self.db.as_ref()).await?;
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        model.map(task_from_model).transpose()
    }

    async fn update(&self, task: &Task) -> Result<Task, RepositoryError> {
        let model: task_entity::ActiveModel = task.into();

        let updated_model = model.update(self.db.as_ref()).await?;
        task_from_model(updated_model)
    }

    async fn list_for_intern(
        &self,
        intern_id: Uuid,
        cohort_id: Option<Uuid>,
    ) -> Result<Vec<Task>, RepositoryError> {
        let mut membership = Condition::any().add(task_entity::Column::AssigneeId.eq(intern_id));
        if let Some(cohort_id) = cohort_id {
            membership = membership.add(task_entity::Column::CohortId.eq(cohort_id));
        }

        let models = task_entity::Entity::find()
            .filter(task_entity::Column::Active.eq(true))
            .filter(membership)
            .order_by_asc(task_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        models.into_iter().map(task_from_model).collect()
    }

    async fn list_all(&self) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .filter(task_entity::Column::Active.eq(true))
            .order_by_asc(task_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        models.into_iter().map(task_from_model).collect()
    }

    async fn list_by_cohort(&self, cohort_id: Uuid) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .filter(task_entity::Column::Active.eq(true))
            .filter(task_entity::Column::CohortId.eq(cohort_id))
            .order_by_asc(task_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        models.into_iter().map(task_from_model).collect()
    }
}
