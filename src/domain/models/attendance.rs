// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AttendanceSettings;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 考勤实体
///
/// 每个（用户，日期）对唯一的签到签退记录。状态与工时
/// 在保存时从签到签退时间戳推导，不可独立设置。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 用户ID，与date构成唯一对
    pub user_id: Uuid,
    /// 考勤日期
    pub date: NaiveDate,
    /// 签到时间
    pub check_in: Option<DateTime<FixedOffset>>,
    /// 签退时间
    pub check_out: Option<DateTime<FixedOffset>>,
    /// 推导出的考勤状态
    pub status: AttendanceStatus,
    /// 推导出的工时（小时，保留两位小数）
    pub working_hours: f64,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 考勤状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// 出勤
    Present,
    /// 迟到
    Late,
    /// 半天
    HalfDay,
    /// 缺勤
    #[default]
    Absent,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::HalfDay => write!(f, "half_day"),
            AttendanceStatus::Absent => write!(f, "absent"),
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "late" => Ok(AttendanceStatus::Late),
            "half_day" => Ok(AttendanceStatus::HalfDay),
            "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(()),
        }
    }
}

/// 考勤推导规则
///
/// 所有阈值来自配置。短时长会话（低于半天阈值）按配置
/// 的状态处理，默认与源系统一致记为出勤。
#[derive(Debug, Clone)]
pub struct AttendanceRules {
    /// 工作日开始时间（小时）
    pub workday_start_hour: u32,
    /// 迟到宽限期（分钟）
    pub grace_minutes: u32,
    /// 全天工时阈值（小时）
    pub full_day_hours: f64,
    /// 半天工时阈值（小时）
    pub half_day_hours: f64,
    /// 短时长会话的状态
    pub short_session_status: AttendanceStatus,
}

impl From<&AttendanceSettings> for AttendanceRules {
    fn from(settings: &AttendanceSettings) -> Self {
        Self {
            workday_start_hour: settings.workday_start_hour,
            grace_minutes: settings.grace_minutes,
            full_day_hours: settings.full_day_hours,
            half_day_hours: settings.half_day_hours,
            short_session_status: settings
                .short_session_status
                .parse()
                .unwrap_or(AttendanceStatus::Present),
        }
    }
}

impl Default for AttendanceRules {
    fn default() -> Self {
        Self {
            workday_start_hour: 9,
            grace_minutes: 15,
            full_day_hours: 8.0,
            half_day_hours: 4.0,
            short_session_status: AttendanceStatus::Present,
        }
    }
}

/// 从签到签退时间戳推导考勤状态与工时
///
/// 纯函数：相同的时间戳对总是产生相同的结果。
///
/// * 签到签退都存在：工时 = 签退 - 签到（小时，两位小数），
///   签退早于签到时按0计；工时达到全天阈值且签到在迟到阈值
///   前为出勤，否则为迟到；工时在[半天, 全天)区间为半天；
///   更短的会话按配置状态处理。
/// * 仅有签到：视为仍在工作，记为出勤，工时为0。
/// * 两者皆无：缺勤。
pub fn derive_attendance(
    check_in: Option<DateTime<FixedOffset>>,
    check_out: Option<DateTime<FixedOffset>>,
    rules: &AttendanceRules,
) -> (AttendanceStatus, f64) {
    let check_in = match check_in {
        Some(check_in) => check_in,
        None => return (AttendanceStatus::Absent, 0.0),
    };

    let check_out = match check_out {
        Some(check_out) => check_out,
        None => return (AttendanceStatus::Present, 0.0),
    };

    let hours = (check_out - check_in).num_seconds().max(0) as f64 / 3600.0;
    let hours = (hours * 100.0).round() / 100.0;

    // 迟到阈值：工作日开始时间加宽限期
    let threshold = NaiveTime::from_hms_opt(rules.workday_start_hour, rules.grace_minutes, 0)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 15, 0).unwrap());
    let on_time = check_in.time().hour() < threshold.hour()
        || (check_in.time().hour() == threshold.hour()
            && check_in.time().minute() <= threshold.minute());

    let status = if hours >= rules.full_day_hours {
        if on_time {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Late
        }
    } else if hours >= rules.half_day_hours {
        AttendanceStatus::HalfDay
    } else {
        rules.short_session_status
    };

    (status, hours)
}

impl Attendance {
    /// 创建一条新的考勤记录并立即推导状态
    pub fn new(
        user_id: Uuid,
        date: NaiveDate,
        check_in: Option<DateTime<FixedOffset>>,
        rules: &AttendanceRules,
    ) -> Self {
        let (status, working_hours) = derive_attendance(check_in, None, rules);
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            check_in,
            check_out: None,
            status,
            working_hours,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    /// 重新推导状态与工时
    ///
    /// 每次保存前调用，保证推导字段与时间戳一致
    pub fn apply_derivation(&mut self, rules: &AttendanceRules) {
        let (status, working_hours) = derive_attendance(self.check_in, self.check_out, rules);
        self.status = status;
        self.working_hours = working_hours;
        self.updated_at = Utc::now().into();
    }
}
