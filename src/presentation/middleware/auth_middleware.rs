// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::{session as session_entity, user as user_entity};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::CurrentUser;

/// 无需认证的公开路径
const PUBLIC_PATHS: &[&str] = &["/health", "/v1/version"];

/// 认证中间件状态
#[derive(Clone)]
pub struct AuthState {
    /// 数据库连接
    pub db: Arc<DatabaseConnection>,
}

/// 认证中间件
///
/// 从Authorization头提取Bearer令牌，校验会话有效期与用户
/// 活跃状态，并将当前用户注入请求扩展。停用用户的会话立即
/// 失效。
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?
        .to_string();

    let session = session_entity::Entity::find_by_id(token)
        .one(state.db.as_ref())
        .await
        .map_err(RepositoryError::from)?
        .ok_or(AppError::Unauthorized)?;

    if session.expires_at <= Utc::now() {
        return Err(AppError::Unauthorized);
    }

    let user = user_entity::Entity::find_by_id(session.user_id)
        .one(state.db.as_ref())
        .await
        .map_err(RepositoryError::from)?
        .ok_or(AppError::Unauthorized)?;

    if !user.active {
        return Err(AppError::Unauthorized);
    }

    let current_user = CurrentUser {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        role: user.role.parse().unwrap_or_default(),
        college_id: user.college_id,
        cohort_id: user.cohort_id,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}
