// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::domain::models::user::Role;
use crate::presentation::errors::AppError;

/// 当前认证用户
///
/// 由认证中间件在请求扩展中注入，处理器通过提取器获取。
#[derive(Clone, Debug)]
pub struct CurrentUser {
    /// 用户ID
    pub id: Uuid,
    /// 用户名
    pub username: String,
    /// 显示名称
    pub display_name: String,
    /// 角色
    pub role: Role,
    /// 所属学院ID
    pub college_id: Option<Uuid>,
    /// 所属班组ID
    pub cohort_id: Option<Uuid>,
}

impl CurrentUser {
    /// 要求任务管理权限
    ///
    /// 管理员、技术负责人和联络人可以管理任务与进度。
    pub fn require_task_manager(&self) -> Result<(), AppError> {
        if self.role.can_manage_tasks() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "task management requires an elevated role".to_string(),
            ))
        }
    }

    /// 要求管理员权限
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "administrator role required".to_string(),
            ))
        }
    }

    /// 是否为实习生
    pub fn is_intern(&self) -> bool {
        self.role == Role::Intern
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
