// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::models::attendance::Attendance;

/// 签到/签退请求DTO
///
/// 时间戳可选，缺省使用服务器当前时间
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CheckRequestDto {
    /// 签到或签退时间
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// 考勤响应DTO
#[derive(Debug, Serialize)]
pub struct AttendanceResponseDto {
    /// 是否成功
    pub success: bool,

    /// 考勤记录，状态与工时为推导字段
    pub attendance: Attendance,
}

/// 考勤历史响应DTO
#[derive(Debug, Serialize)]
pub struct AttendanceListResponseDto {
    /// 是否成功
    pub success: bool,

    /// 按日期降序的考勤记录
    pub records: Vec<Attendance>,

    /// 出勤天数（出勤与迟到均计入）
    pub present_days: u64,
}
