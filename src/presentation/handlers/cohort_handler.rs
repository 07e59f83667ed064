// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::cohort::Cohort;
use crate::domain::repositories::cohort_repository::CohortRepository;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::CurrentUser;
use axum::{extract::Extension, Json};
use serde::Serialize;
use std::sync::Arc;

/// 班组列表响应DTO
#[derive(Debug, Serialize)]
pub struct CohortListResponseDto {
    /// 是否成功
    pub success: bool,

    /// 按名称排序的活跃班组
    pub cohorts: Vec<Cohort>,
}

/// 查询活跃班组列表
pub async fn list_cohorts<C: CohortRepository>(
    Extension(cohort_repo): Extension<Arc<C>>,
    _user: CurrentUser,
) -> Result<Json<CohortListResponseDto>, AppError> {
    let cohorts = cohort_repo.list_active().await?;

    Ok(Json(CohortListResponseDto {
        success: true,
        cohorts,
    }))
}
