// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use internlink::domain::models::attendance::{
    derive_attendance, Attendance, AttendanceRules, AttendanceStatus,
};
use uuid::Uuid;

fn at(time: &str) -> Option<DateTime<FixedOffset>> {
    Some(
        format!("2025-09-01T{time}+08:00")
            .parse()
            .expect("valid timestamp"),
    )
}

#[test]
fn test_no_timestamps_is_absent() {
    let rules = AttendanceRules::default();
    let (status, hours) = derive_attendance(None, None, &rules);

    assert_eq!(status, AttendanceStatus::Absent);
    assert_eq!(hours, 0.0);
}

#[test]
fn test_check_in_only_is_present_with_zero_hours() {
    let rules = AttendanceRules::default();
    let (status, hours) = derive_attendance(at("08:55:00"), None, &rules);

    assert_eq!(status, AttendanceStatus::Present);
    assert_eq!(hours, 0.0);
}

#[test]
fn test_full_day_on_time_is_present() {
    let rules = AttendanceRules::default();
    let (status, hours) = derive_attendance(at("09:00:00"), at("17:30:00"), &rules);

    assert_eq!(status, AttendanceStatus::Present);
    assert_eq!(hours, 8.5);
}

#[test]
fn test_grace_period_boundary() {
    let rules = AttendanceRules::default();

    // 9:15整点仍在宽限期内
    let (status, _) = derive_attendance(at("09:15:00"), at("17:30:00"), &rules);
    assert_eq!(status, AttendanceStatus::Present);

    // 9:16超过宽限期
    let (status, _) = derive_attendance(at("09:16:00"), at("17:30:00"), &rules);
    assert_eq!(status, AttendanceStatus::Late);
}

#[test]
fn test_half_day_band() {
    let rules = AttendanceRules::default();
    let (status, hours) = derive_attendance(at("09:00:00"), at("14:00:00"), &rules);

    assert_eq!(status, AttendanceStatus::HalfDay);
    assert_eq!(hours, 5.0);
}

#[test]
fn test_short_session_defaults_to_present() {
    let rules = AttendanceRules::default();
    let (status, hours) = derive_attendance(at("09:00:00"), at("10:30:00"), &rules);

    assert_eq!(status, AttendanceStatus::Present);
    assert_eq!(hours, 1.5);
}

#[test]
fn test_short_session_status_is_configurable() {
    let rules = AttendanceRules {
        short_session_status: AttendanceStatus::Absent,
        ..AttendanceRules::default()
    };
    let (status, _) = derive_attendance(at("09:00:00"), at("10:30:00"), &rules);

    assert_eq!(status, AttendanceStatus::Absent);
}

#[test]
fn test_inverted_timestamps_never_yield_negative_hours() {
    let rules = AttendanceRules::default();
    let (status, hours) = derive_attendance(at("17:00:00"), at("09:00:00"), &rules);

    // 签退早于签到时工时按0计，落入短时长会话的处理
    assert_eq!(hours, 0.0);
    assert_eq!(status, AttendanceStatus::Present);
}

#[test]
fn test_hours_rounded_to_two_decimals() {
    let rules = AttendanceRules::default();
    let (_, hours) = derive_attendance(at("09:00:00"), at("17:10:30"), &rules);

    assert_eq!(hours, 8.18);
}

#[test]
fn test_derivation_is_pure() {
    let rules = AttendanceRules::default();
    let first = derive_attendance(at("09:20:00"), at("18:00:00"), &rules);
    let second = derive_attendance(at("09:20:00"), at("18:00:00"), &rules);

    assert_eq!(first, second);
    assert_eq!(first.0, AttendanceStatus::Late);
}

#[test]
fn test_apply_derivation_updates_record() {
    let rules = AttendanceRules::default();
    let user_id = Uuid::new_v4();
    let date = "2025-09-01".parse().expect("date");

    let mut record = Attendance::new(user_id, date, at("09:05:00"), &rules);
    assert_eq!(record.status, AttendanceStatus::Present);
    assert_eq!(record.working_hours, 0.0);

    record.check_out = at("17:30:00");
    record.apply_derivation(&rules);
    assert_eq!(record.status, AttendanceStatus::Present);
    assert_eq!(record.working_hours, 8.42);
}
