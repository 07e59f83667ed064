// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::user::Role;

/// 创建用户请求DTO
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateUserRequestDto {
    /// 用户名，全局唯一
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: Option<String>,

    /// 外部身份提供方ID，全局唯一
    pub provider_id: Option<String>,

    /// 邮箱地址
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    /// 显示名称
    pub display_name: Option<String>,

    /// 初始角色，缺省为待定
    pub role: Option<Role>,

    /// 所属学院ID
    pub college_id: Option<Uuid>,

    /// 所属班组ID
    pub cohort_id: Option<Uuid>,
}

/// 更新用户请求DTO，所有字段可选
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateUserRequestDto {
    /// 显示名称
    pub display_name: Option<String>,

    /// 邮箱地址
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,

    /// 角色（仅管理员可修改）
    pub role: Option<Role>,

    /// 所属学院ID
    pub college_id: Option<Uuid>,

    /// 所属班组ID
    pub cohort_id: Option<Uuid>,
}
