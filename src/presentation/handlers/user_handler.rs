// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::task_request::OperationResponseDto;
use crate::application::dto::user_request::{CreateUserRequestDto, UpdateUserRequestDto};
use crate::domain::models::user::User;
use crate::domain::repositories::user_repository::UserRepository;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::CurrentUser;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 用户响应DTO
#[derive(Debug, Serialize)]
pub struct UserResponseDto {
    /// 是否成功
    pub success: bool,

    /// 用户实体
    pub user: User,
}

/// 创建用户
///
/// 仅管理员可调用。用户名在活跃与非活跃用户间全局唯一，
/// 冲突在插入前检查并返回验证错误。
pub async fn create_user<U: UserRepository>(
    Extension(user_repo): Extension<Arc<U>>,
    current: CurrentUser,
    Json(request): Json<CreateUserRequestDto>,
) -> Result<(StatusCode, Json<UserResponseDto>), AppError> {
    current.require_admin()?;
    request
        .validate()
        .map_err(AppError::from_validation_errors)?;

    let mut missing = Vec::new();
    if request.username.is_none() {
        missing.push("username");
    }
    if request.provider_id.is_none() {
        missing.push("provider_id");
    }
    if request.email.is_none() {
        missing.push("email");
    }
    if request.display_name.is_none() {
        missing.push("display_name");
    }
    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }

    let username = request.username.unwrap_or_default();
    if user_repo.find_by_username(&username).await?.is_some() {
        return Err(AppError::Validation(format!(
            "Username already taken: {username}"
        )));
    }

    let mut user = User::new(
        username,
        request.provider_id.unwrap_or_default(),
        request.email.unwrap_or_default(),
        request.display_name.unwrap_or_default(),
        request.role.unwrap_or_default(),
    );
    user.college_id = request.college_id;
    user.cohort_id = request.cohort_id;

    let created = user_repo.create(&user).await?;
    tracing::info!(user_id = %created.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserResponseDto {
            success: true,
            user: created,
        }),
    ))
}

/// 查询单个用户
///
/// 管理员可查任意用户，其他角色只能查自己
pub async fn get_user<U: UserRepository>(
    Extension(user_repo): Extension<Arc<U>>,
    current: CurrentUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponseDto>, AppError> {
    if user_id != current.id {
        current.require_admin()?;
    }

    let user = user_repo
        .find_by_id(user_id)
        .await?
        .filter(|u| u.active)
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    Ok(Json(UserResponseDto {
        success: true,
        user,
    }))
}

/// 更新用户
///
/// 仅管理员可调用，角色提升（如待定到实习生）经由此入口
pub async fn update_user<U: UserRepository>(
    Extension(user_repo): Extension<Arc<U>>,
    current: CurrentUser,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateUserRequestDto>,
) -> Result<Json<UserResponseDto>, AppError> {
    current.require_admin()?;
    request
        .validate()
        .map_err(AppError::from_validation_errors)?;

    let mut user = user_repo
        .find_by_id(user_id)
        .await?
        .filter(|u| u.active)
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    if let Some(display_name) = request.display_name {
        user.display_name = display_name;
    }
    if let Some(email) = request.email {
        user.email = email;
    }
    if let Some(role) = request.role {
        user.role = role;
    }
    if let Some(college_id) = request.college_id {
        user.college_id = Some(college_id);
    }
    if let Some(cohort_id) = request.cohort_id {
        user.cohort_id = Some(cohort_id);
    }
    user.updated_at = Utc::now().into();

    let updated = user_repo.update(&user).await?;

    Ok(Json(UserResponseDto {
        success: true,
        user: updated,
    }))
}

/// 软删除用户
///
/// 仅管理员可调用。用户名保持占用，该用户的会话随活跃
/// 标志立即失效。
pub async fn delete_user<U: UserRepository>(
    Extension(user_repo): Extension<Arc<U>>,
    current: CurrentUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<OperationResponseDto>, AppError> {
    current.require_admin()?;

    user_repo.soft_delete(user_id).await?;
    tracing::info!(user_id = %user_id, "User soft-deleted");

    Ok(Json(OperationResponseDto { success: true }))
}

/// 清除用户
///
/// 仅管理员可调用。在单个事务中删除用户及其进度、考勤、
/// 任务与会话记录，不可恢复。
pub async fn purge_user<U: UserRepository>(
    Extension(user_repo): Extension<Arc<U>>,
    current: CurrentUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<OperationResponseDto>, AppError> {
    current.require_admin()?;

    user_repo.purge(user_id).await?;
    tracing::warn!(user_id = %user_id, "User purged");

    Ok(Json(OperationResponseDto { success: true }))
}
