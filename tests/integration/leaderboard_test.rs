// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{intern_identity, seed_cohort_task, seed_intern, spawn_app, TestApp};
use axum::http::StatusCode;
use internlink::domain::models::task_progress::TaskProgress;
use internlink::domain::models::user::{Role, User};
use internlink::domain::repositories::task_progress_repository::TaskProgressRepository;
use internlink::domain::repositories::user_repository::UserRepository;
use internlink::presentation::extractors::current_user::CurrentUser;
use uuid::Uuid;

/// 把当前请求身份登记为实习生账号
async fn seed_identity(app: &TestApp, identity: &CurrentUser) {
    let mut user = User::new(
        identity.username.clone(),
        format!("provider-{}", identity.username),
        format!("{}@example.com", identity.username),
        identity.display_name.clone(),
        Role::Intern,
    );
    user.id = identity.id;
    user.college_id = identity.college_id;
    user.cohort_id = identity.cohort_id;
    app.user_repo.create(&user).await.expect("seed identity");
}

#[tokio::test]
async fn test_cohort_leaderboard_ranking() {
    let cohort_id = Uuid::new_v4();
    let mut identity = intern_identity(Some(cohort_id));
    identity.username = "alice".to_string();
    let alice_id = identity.id;
    let app = spawn_app(identity.clone());

    seed_identity(&app, &identity).await;
    let bob = seed_intern(&app, "bob", None, Some(cohort_id)).await;
    let _carol = seed_intern(&app, "carol", None, Some(cohort_id)).await;

    let t1 = seed_cohort_task(&app, cohort_id, 10).await;
    let t2 = seed_cohort_task(&app, cohort_id, 20).await;

    for task in [&t1, &t2] {
        let mut record = TaskProgress::new(task.id, alice_id);
        record.complete(task.points).expect("complete");
        app.progress_repo.create(&record).await.expect("seed");
    }
    let mut record = TaskProgress::new(t2.id, bob.id);
    record.complete(t2.points).expect("complete");
    app.progress_repo.create(&record).await.expect("seed");

    let response = app.server.get("/v1/leaderboard?scope=cohort").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["scope"], "cohort");
    let entries = body["leaderboard"].as_array().expect("entries");
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0]["username"], "alice");
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["points_earned"], 30);
    assert_eq!(entries[0]["completed_tasks"], 2);
    assert_eq!(entries[0]["completion_rate"], 100);
    assert_eq!(entries[0]["is_current_user"], true);

    assert_eq!(entries[1]["username"], "bob");
    assert_eq!(entries[1]["rank"], 2);
    assert_eq!(entries[1]["points_earned"], 20);
    assert_eq!(entries[1]["completion_rate"], 50);
    assert_eq!(entries[1]["is_current_user"], false);

    assert_eq!(entries[2]["username"], "carol");
    assert_eq!(entries[2]["rank"], 3);
    assert_eq!(entries[2]["points_earned"], 0);
    assert_eq!(entries[2]["total_tasks"], 2);

    // 名次是1..N的排列
    let ranks: Vec<u64> = entries
        .iter()
        .map(|e| e["rank"].as_u64().expect("rank"))
        .collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_in_review_counts_at_threshold() {
    let cohort_id = Uuid::new_v4();
    let mut identity = intern_identity(Some(cohort_id));
    identity.username = "alice".to_string();
    let alice_id = identity.id;
    let app = spawn_app(identity.clone());

    seed_identity(&app, &identity).await;
    let bob = seed_intern(&app, "bob", None, Some(cohort_id)).await;

    let task = seed_cohort_task(&app, cohort_id, 10).await;

    // alice待审核95%：计为完成；bob待审核80%：不计
    let mut high = TaskProgress::new(task.id, alice_id);
    high.apply_progress(95, task.points).expect("progress");
    high.submit("https://git.example.com/mr/1".to_string(), None)
        .expect("submit");
    app.progress_repo.create(&high).await.expect("seed");

    let mut low = TaskProgress::new(task.id, bob.id);
    low.apply_progress(80, task.points).expect("progress");
    low.submit("https://git.example.com/mr/2".to_string(), None)
        .expect("submit");
    app.progress_repo.create(&low).await.expect("seed");

    let response = app.server.get("/v1/leaderboard?scope=cohort").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let entries = body["leaderboard"].as_array().expect("entries");

    assert_eq!(entries[0]["username"], "alice");
    assert_eq!(entries[0]["completed_tasks"], 1);
    assert_eq!(entries[0]["points_earned"], 10);
    assert_eq!(entries[1]["username"], "bob");
    assert_eq!(entries[1]["completed_tasks"], 0);
    assert_eq!(entries[1]["points_earned"], 0);
}

#[tokio::test]
async fn test_cohort_scope_requires_cohort_membership() {
    let app = spawn_app(intern_identity(None));

    let response = app.server.get("/v1/leaderboard?scope=cohort").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_scope_rejected() {
    let app = spawn_app(intern_identity(Some(Uuid::new_v4())));

    let response = app.server.get("/v1/leaderboard?scope=galaxy").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_global_scope_covers_all_cohorts() {
    let mut identity = intern_identity(Some(Uuid::new_v4()));
    identity.username = "alice".to_string();
    let app = spawn_app(identity.clone());

    seed_identity(&app, &identity).await;
    seed_intern(&app, "bob", None, Some(Uuid::new_v4())).await;

    let response = app.server.get("/v1/leaderboard?scope=global").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["leaderboard"].as_array().expect("entries").len(), 2);
    assert_eq!(body["scope"], "global");
}
