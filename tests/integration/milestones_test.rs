// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{intern_identity, seed_individual_task, spawn_app};
use internlink::domain::models::attendance::{Attendance, AttendanceRules};
use internlink::domain::models::task_progress::TaskProgress;
use internlink::domain::models::user::{Role, User};
use internlink::domain::repositories::attendance_repository::AttendanceRepository;
use internlink::domain::repositories::task_progress_repository::TaskProgressRepository;
use internlink::domain::repositories::user_repository::UserRepository;

#[tokio::test]
async fn test_milestones_derive_from_counts() {
    let identity = intern_identity(None);
    let app = spawn_app(identity.clone());

    let mut account = User::new(
        identity.username.clone(),
        "provider-1".to_string(),
        "zhang@example.com".to_string(),
        identity.display_name.clone(),
        Role::Intern,
    );
    account.id = identity.id;
    app.user_repo.create(&account).await.expect("seed user");

    // 一个已完成任务
    let task = seed_individual_task(&app, identity.id, 10).await;
    let mut record = TaskProgress::new(task.id, identity.id);
    record.complete(task.points).expect("complete");
    app.progress_repo.create(&record).await.expect("seed");

    // 七天出勤
    let rules = AttendanceRules::default();
    for day in 1..=7 {
        let date = format!("2025-09-{day:02}").parse().expect("date");
        let check_in = format!("2025-09-{day:02}T09:00:00+08:00")
            .parse()
            .expect("timestamp");
        let attendance = Attendance::new(identity.id, date, Some(check_in), &rules);
        app.attendance_repo
            .create(&attendance)
            .await
            .expect("seed attendance");
    }

    let response = app.server.get("/v1/milestones").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["completed_tasks"], 1);
    assert_eq!(body["attendance_days"], 7);
    // 未配置GitLab时提交数为0
    assert_eq!(body["commit_count"], 0);

    let achievements = body["achievements"].as_array().expect("achievements");
    let by_id = |id: &str| {
        achievements
            .iter()
            .find(|a| a["id"] == id)
            .unwrap_or_else(|| panic!("achievement {id}"))
    };

    assert_eq!(by_id("first_task")["achieved"], true);
    assert_eq!(by_id("attendance_7")["achieved"], true);
    assert_eq!(by_id("attendance_14")["achieved"], false);
    assert_eq!(by_id("attendance_14")["progress_pct"], 50);
    assert_eq!(by_id("rate_95")["achieved"], true);

    // 已达成的成就排在未达成的前面
    let first_unachieved = achievements
        .iter()
        .position(|a| a["achieved"] == false)
        .unwrap_or(achievements.len());
    assert!(achievements[..first_unachieved]
        .iter()
        .all(|a| a["achieved"] == true));
    assert!(achievements[first_unachieved..]
        .iter()
        .all(|a| a["achieved"] == false));
}

#[tokio::test]
async fn test_milestones_ignore_records_of_deleted_tasks() {
    let identity = intern_identity(None);
    let app = spawn_app(identity.clone());

    let mut account = User::new(
        identity.username.clone(),
        "provider-2".to_string(),
        "li@example.com".to_string(),
        identity.display_name.clone(),
        Role::Intern,
    );
    account.id = identity.id;
    app.user_repo.create(&account).await.expect("seed user");

    let task = seed_individual_task(&app, identity.id, 10).await;
    let mut record = TaskProgress::new(task.id, identity.id);
    record.complete(task.points).expect("complete");
    app.progress_repo.create(&record).await.expect("seed");

    // 指向已不可见任务的残留记录
    let mut orphan = TaskProgress::new(uuid::Uuid::new_v4(), identity.id);
    orphan.complete(10).expect("complete");
    app.progress_repo.create(&orphan).await.expect("seed");

    let response = app.server.get("/v1/milestones").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    // 完成数与完成率都只统计可见任务，比率不会超过100
    assert_eq!(body["completed_tasks"], 1);
    let rate_95 = body["achievements"]
        .as_array()
        .expect("achievements")
        .iter()
        .find(|a| a["id"] == "rate_95")
        .expect("rate_95")
        .clone();
    assert_eq!(rate_95["achieved"], true);
}

#[tokio::test]
async fn test_milestones_for_unknown_account() {
    // 身份存在但账号未登记：返回404而不是空成就
    let app = spawn_app(intern_identity(None));

    let response = app.server.get("/v1/milestones").await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}
