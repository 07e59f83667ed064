// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::attendance_request::{
    AttendanceListResponseDto, AttendanceResponseDto, CheckRequestDto,
};
use crate::config::settings::Settings;
use crate::domain::models::attendance::{Attendance, AttendanceRules};
use crate::domain::repositories::attendance_repository::AttendanceRepository;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::current_user::CurrentUser;
use axum::{extract::Extension, Json};
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;

fn effective_time(request: &CheckRequestDto) -> DateTime<FixedOffset> {
    request.timestamp.unwrap_or_else(|| Utc::now().into())
}

/// 签到
///
/// 每个（用户，日期）对只有一条记录，重复签到返回验证
/// 错误。状态与工时在保存时从时间戳推导。
pub async fn check_in<A: AttendanceRepository>(
    Extension(attendance_repo): Extension<Arc<A>>,
    Extension(settings): Extension<Arc<Settings>>,
    user: CurrentUser,
    Json(request): Json<CheckRequestDto>,
) -> Result<Json<AttendanceResponseDto>, AppError> {
    let now = effective_time(&request);
    let date = now.date_naive();
    let rules = AttendanceRules::from(&settings.attendance);

    if let Some(existing) = attendance_repo.find_by_user_and_date(user.id, date).await? {
        if existing.check_in.is_some() {
            return Err(AppError::Validation(
                "Already checked in today".to_string(),
            ));
        }
        let mut record = existing;
        record.check_in = Some(now);
        record.apply_derivation(&rules);
        let updated = attendance_repo.update(&record).await?;
        return Ok(Json(AttendanceResponseDto {
            success: true,
            attendance: updated,
        }));
    }

    let record = Attendance::new(user.id, date, Some(now), &rules);
    let created = attendance_repo.create(&record).await?;

    Ok(Json(AttendanceResponseDto {
        success: true,
        attendance: created,
    }))
}

/// 签退
///
/// 要求当天已有签到记录。保存前重新推导状态与工时，
/// 保证推导字段与时间戳一致。
pub async fn check_out<A: AttendanceRepository>(
    Extension(attendance_repo): Extension<Arc<A>>,
    Extension(settings): Extension<Arc<Settings>>,
    user: CurrentUser,
    Json(request): Json<CheckRequestDto>,
) -> Result<Json<AttendanceResponseDto>, AppError> {
    let now = effective_time(&request);
    let date = now.date_naive();
    let rules = AttendanceRules::from(&settings.attendance);

    let mut record = attendance_repo
        .find_by_user_and_date(user.id, date)
        .await?
        .ok_or_else(|| {
            AppError::Validation("Check-in is required before check-out".to_string())
        })?;

    match record.check_in {
        None => {
            return Err(AppError::Validation(
                "Check-in is required before check-out".to_string(),
            ));
        }
        Some(check_in) if now < check_in => {
            return Err(AppError::Validation(
                "Check-out must be after check-in".to_string(),
            ));
        }
        Some(_) => {}
    }

    record.check_out = Some(now);
    record.apply_derivation(&rules);
    let updated = attendance_repo.update(&record).await?;

    Ok(Json(AttendanceResponseDto {
        success: true,
        attendance: updated,
    }))
}

/// 考勤历史
///
/// 返回当前用户按日期降序的全部考勤记录，以及计入出勤
/// 与迟到的出勤天数。
pub async fn list_attendance<A: AttendanceRepository>(
    Extension(attendance_repo): Extension<Arc<A>>,
    user: CurrentUser,
) -> Result<Json<AttendanceListResponseDto>, AppError> {
    let records = attendance_repo.list_by_user(user.id).await?;
    let present_days = attendance_repo.count_present_days(user.id).await?;

    Ok(Json(AttendanceListResponseDto {
        success: true,
        records,
        present_days,
    }))
}
