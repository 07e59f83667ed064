// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::attendance::Attendance;
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// 考勤仓库特质
///
/// 定义考勤记录的数据访问接口
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// 根据（用户，日期）对查找考勤记录
    async fn find_by_user_and_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Attendance>, RepositoryError>;
    /// 创建考勤记录
    async fn create(&self, record: &Attendance) -> Result<Attendance, RepositoryError>;
    /// 更新考勤记录
    async fn update(&self, record: &Attendance) -> Result<Attendance, RepositoryError>;
    /// 查找某用户的全部考勤记录（按日期降序）
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Attendance>, RepositoryError>;
    /// 统计某用户的出勤天数（出勤与迟到均计入）
    async fn count_present_days(&self, user_id: Uuid) -> Result<u64, RepositoryError>;
}
