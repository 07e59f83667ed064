// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器、考勤规则、积分规则和GitLab集成等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 考勤规则配置
    pub attendance: AttendanceSettings,
    /// 积分规则配置
    pub scoring: ScoringSettings,
    /// GitLab集成配置
    #[serde(default)]
    pub gitlab: GitLabSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 考勤规则配置设置
///
/// 状态推导阈值全部可配置，见 DESIGN.md 中关于短时长会话的说明
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceSettings {
    /// 工作日开始时间（小时，24小时制）
    pub workday_start_hour: u32,
    /// 迟到宽限期（分钟）
    pub grace_minutes: u32,
    /// 全天工时阈值（小时）
    pub full_day_hours: f64,
    /// 半天工时阈值（小时）
    pub half_day_hours: f64,
    /// 短时长会话（低于半天阈值）的状态 (present, half_day, absent)
    pub short_session_status: String,
}

/// 积分规则配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    /// 任务未配置积分时的默认值
    pub default_task_points: i32,
}

/// GitLab集成配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitLabSettings {
    /// GitLab实例基础URL（未配置时提交数按0处理）
    pub base_url: Option<String>,
    /// 访问令牌
    pub token: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB pool settings
            .set_default("database.max_connections", 100)?
            .set_default("database.min_connections", 10)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default attendance rules: 9:00 start, 15 min grace, 8h/4h tiers
            .set_default("attendance.workday_start_hour", 9)?
            .set_default("attendance.grace_minutes", 15)?
            .set_default("attendance.full_day_hours", 8.0)?
            .set_default("attendance.half_day_hours", 4.0)?
            .set_default("attendance.short_session_status", "present")?
            // Default scoring settings
            .set_default("scoring.default_task_points", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("INTERNLINK").separator("__"));

        builder.build()?.try_deserialize()
    }
}
