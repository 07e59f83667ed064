// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::models::task::DomainError;
use crate::domain::repositories::task_repository::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，统一转换为结构化的JSON错误响应：
/// 认证失败401、授权失败403、验证失败400、未找到404、其余500。
#[derive(Error, Debug)]
pub enum AppError {
    /// 认证失败，无会话或会话无效
    #[error("Authentication required")]
    Unauthorized,

    /// 授权失败，角色无权执行该操作
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 验证失败，字段缺失或取值越界
    #[error("Validation error: {0}")]
    Validation(String),

    /// 记录未找到或已处于非活跃状态
    #[error("{0} not found")]
    NotFound(String),

    /// 仓库层错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// 领域层错误
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// 未预期的内部错误
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// 从validator的字段级错误构造验证错误
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("{errors}"))
    }

    /// 缺失必填字段的验证错误，列出字段名
    pub fn missing_fields(fields: &[&str]) -> Self {
        AppError::Validation(format!("Missing required fields: {}", fields.join(", ")))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "Record not found".to_string())
            }
            AppError::Repository(RepositoryError::Conflict(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Domain(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Repository(RepositoryError::Database(err)) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!("Unexpected error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
