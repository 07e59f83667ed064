// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::attendance::{Attendance, AttendanceStatus};
use crate::domain::repositories::attendance_repository::AttendanceRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::attendance as attendance_entity;
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 考勤仓库实现
///
/// 基于SeaORM实现的考勤数据访问层
#[derive(Clone)]
pub struct AttendanceRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl AttendanceRepositoryImpl {
    /// 创建新的考勤仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<attendance_entity::Model> for Attendance {
    fn from(model: attendance_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            check_in: model.check_in,
            check_out: model.check_out,
            status: model.status.parse().unwrap_or_default(),
            working_hours: model.working_hours,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&Attendance> for attendance_entity::ActiveModel {
    fn from(record: &Attendance) -> Self {
        Self {
            id: Set(record.id),
            user_id: Set(record.user_id),
            date: Set(record.date),
            check_in: Set(record.check_in),
            check_out: Set(record.check_out),
            status: Set(record.status.to_string()),
            working_hours: Set(record.working_hours),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
        }
    }
}

#[async_trait]
impl AttendanceRepository for AttendanceRepositoryImpl {
    async fn find_by_user_and_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Attendance>, RepositoryError> {
        let model = attendance_entity::Entity::find()
            .filter(attendance_entity::Column::UserId.eq(user_id))
            .filter(attendance_entity::Column::Date.eq(date))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, record: &Attendance) -> Result<Attendance, RepositoryError> {
        let model: attendance_entity::ActiveModel = record.into();

        model.insert(self.db.as_ref()).await?;
        Ok(record.clone())
    }

    async fn update(&self, record: &Attendance) -> Result<Attendance, RepositoryError> {
        let model: attendance_entity::ActiveModel = record.into();

        let updated_model = model.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Attendance>, RepositoryError> {
        let models = attendance_entity::Entity::find()
            .filter(attendance_entity::Column::UserId.eq(user_id))
            .order_by_desc(attendance_entity::Column::Date)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count_present_days(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        let count = attendance_entity::Entity::find()
            .filter(attendance_entity::Column::UserId.eq(user_id))
            .filter(attendance_entity::Column::Status.is_in([
                AttendanceStatus::Present.to_string(),
                AttendanceStatus::Late.to_string(),
            ]))
            .count(self.db.as_ref())
            .await?;

        Ok(count)
    }
}
