// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 用户实体
///
/// 表示系统中的一个参与者，携带固定枚举中的角色以及
/// 可选的学院、班组归属。通过活跃标志实现软删除，
/// 硬删除仅由管理员显式清除操作触发。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识符
    pub id: Uuid,
    /// 用户名，在活跃与非活跃用户间全局唯一
    pub username: String,
    /// 外部身份提供方ID，全局唯一
    pub provider_id: String,
    /// 邮箱地址
    pub email: String,
    /// 显示名称
    pub display_name: String,
    /// 角色，所有授权决策的依据
    pub role: Role,
    /// 所属学院ID（可选）
    pub college_id: Option<Uuid>,
    /// 所属班组ID（可选）
    pub cohort_id: Option<Uuid>,
    /// 活跃标志，false表示已软删除
    pub active: bool,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 用户角色枚举
///
/// 封闭的角色集合，每个角色对应一组固定的操作权限。
/// 首次通过外部身份提供方登录的用户默认为Pending，
/// 由管理员提升为其他角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// 待定，首次登录后的最低权限状态
    #[default]
    Pending,
    /// 实习生
    Intern,
    /// 技术负责人
    TechLead,
    /// 联络人
    PointOfContact,
    /// 管理员
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Pending => write!(f, "pending"),
            Role::Intern => write!(f, "intern"),
            Role::TechLead => write!(f, "tech_lead"),
            Role::PointOfContact => write!(f, "point_of_contact"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Role::Pending),
            "intern" => Ok(Role::Intern),
            "tech_lead" => Ok(Role::TechLead),
            "point_of_contact" => Ok(Role::PointOfContact),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

impl Role {
    /// 判断角色是否可以创建和分配任务
    pub fn can_manage_tasks(&self) -> bool {
        matches!(self, Role::Admin | Role::TechLead | Role::PointOfContact)
    }
}

impl User {
    /// 创建一个新的用户
    ///
    /// # 参数
    ///
    /// * `username` - 用户名
    /// * `provider_id` - 外部身份提供方ID
    /// * `email` - 邮箱地址
    /// * `display_name` - 显示名称
    /// * `role` - 初始角色
    ///
    /// # 返回值
    ///
    /// 返回新创建的用户实例
    pub fn new(
        username: String,
        provider_id: String,
        email: String,
        display_name: String,
        role: Role,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            provider_id,
            email,
            display_name,
            role,
            college_id: None,
            cohort_id: None,
            active: true,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    /// 账户年龄（天数），用于里程碑推导
    pub fn account_age_days(&self, now: DateTime<FixedOffset>) -> i64 {
        (now - self.created_at).num_days().max(0)
    }
}
