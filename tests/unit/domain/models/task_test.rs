// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use internlink::domain::models::task::{
    Assignment, Subtask, Task, TaskPriority, TaskStatus,
};
use uuid::Uuid;

fn make_task(assignment: Assignment) -> Task {
    Task::new(
        "Build the login page".to_string(),
        "Implement the OAuth flow".to_string(),
        "frontend".to_string(),
        TaskPriority::Medium,
        assignment,
        None,
        10,
        Utc::now().into(),
        Uuid::new_v4(),
    )
    .expect("valid task")
}

fn with_subtasks(count: usize) -> Task {
    let mut task = make_task(Assignment::Cohort(Uuid::new_v4()));
    task.subtasks = (0..count)
        .map(|i| Subtask {
            id: Uuid::new_v4(),
            title: format!("step {i}"),
            done: false,
        })
        .collect();
    task
}

#[test]
fn test_new_task_defaults() {
    let task = make_task(Assignment::Individual(Uuid::new_v4()));

    assert_eq!(task.status, TaskStatus::Assigned);
    assert_eq!(task.progress, 0);
    assert_eq!(task.points, 10);
    assert!(task.active);
    assert!(task.completed_by.is_none());
}

#[test]
fn test_new_task_rejects_negative_points() {
    let result = Task::new(
        "t".to_string(),
        "d".to_string(),
        "c".to_string(),
        TaskPriority::Low,
        Assignment::Individual(Uuid::new_v4()),
        Some(-5),
        10,
        Utc::now().into(),
        Uuid::new_v4(),
    );

    assert!(result.is_err());
}

#[test]
fn test_lifecycle_happy_path() {
    let mut task = make_task(Assignment::Individual(Uuid::new_v4()));

    task.start().expect("start from assigned");
    assert_eq!(task.status, TaskStatus::InProgress);

    task.apply_progress(60).expect("mid progress");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.progress, 60);

    task.apply_progress(100).expect("full progress");
    assert_eq!(task.status, TaskStatus::Completed);
    assert!(task.completed_at.is_some());
}

#[test]
fn test_progress_out_of_range_rejected() {
    let mut task = make_task(Assignment::Individual(Uuid::new_v4()));

    assert!(task.apply_progress(101).is_err());
    assert!(task.apply_progress(-1).is_err());
    // 状态未被越界输入破坏
    assert_eq!(task.status, TaskStatus::Assigned);
    assert_eq!(task.progress, 0);
}

#[test]
fn test_progress_reversion_clears_completion() {
    let mut task = make_task(Assignment::Individual(Uuid::new_v4()));
    let worker = Uuid::new_v4();

    task.complete(worker).expect("complete");
    assert_eq!(task.completed_by, Some(worker));

    task.apply_progress(50).expect("revert");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert!(task.completed_by.is_none());
    assert!(task.completed_at.is_none());
}

#[test]
fn test_subtasks_drive_completion() {
    let mut task = with_subtasks(4);
    let ids: Vec<Uuid> = task.subtasks.iter().map(|s| s.id).collect();

    for id in &ids {
        task.set_subtask(*id, true).expect("check");
    }
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.progress, 100);
    assert!(task.completed_at.is_some());

    // 取消勾选一个子任务：4个里剩3个，进度75，状态回退
    task.set_subtask(ids[0], false).expect("uncheck");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.progress, 75);
    assert!(task.completed_by.is_none());
    assert!(task.completed_at.is_none());
}

#[test]
fn test_subtasks_all_unchecked_back_to_assigned() {
    let mut task = with_subtasks(2);
    let ids: Vec<Uuid> = task.subtasks.iter().map(|s| s.id).collect();

    task.set_subtask(ids[0], true).expect("check");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.progress, 50);

    task.set_subtask(ids[0], false).expect("uncheck");
    assert_eq!(task.status, TaskStatus::Assigned);
    assert_eq!(task.progress, 0);
}

#[test]
fn test_unknown_subtask_rejected() {
    let mut task = with_subtasks(2);
    assert!(task.set_subtask(Uuid::new_v4(), true).is_err());
}

#[test]
fn test_cancelled_is_terminal() {
    let mut task = make_task(Assignment::Individual(Uuid::new_v4()));

    task.cancel().expect("cancel");
    assert_eq!(task.status, TaskStatus::Cancelled);

    assert!(task.apply_progress(50).is_err());
    assert!(task.start().is_err());
    assert!(task.complete(Uuid::new_v4()).is_err());
    assert!(task.cancel().is_err());
}

#[test]
fn test_completed_cannot_be_cancelled() {
    let mut task = make_task(Assignment::Individual(Uuid::new_v4()));
    task.complete(Uuid::new_v4()).expect("complete");

    assert!(task.cancel().is_err());
}

#[test]
fn test_submit_requires_url_and_moves_to_review() {
    use internlink::domain::models::task::Submission;

    let mut task = make_task(Assignment::Individual(Uuid::new_v4()));

    let empty = Submission {
        url: "  ".to_string(),
        note: None,
        submitted_by: Uuid::new_v4(),
        submitted_at: Utc::now().into(),
    };
    assert!(task.submit(empty).is_err());
    assert_eq!(task.status, TaskStatus::Assigned);

    let submission = Submission {
        url: "https://git.example.com/mr/1".to_string(),
        note: Some("ready".to_string()),
        submitted_by: Uuid::new_v4(),
        submitted_at: Utc::now().into(),
    };
    task.submit(submission).expect("submit");
    assert_eq!(task.status, TaskStatus::InReview);
    assert_eq!(task.submissions.len(), 1);
}

#[test]
fn test_reassign_replaces_assignment() {
    let intern = Uuid::new_v4();
    let cohort = Uuid::new_v4();
    let mut task = make_task(Assignment::Individual(intern));
    assert_eq!(task.assignment.assignee_id(), Some(intern));

    task.reassign(Assignment::Cohort(cohort));
    assert_eq!(task.assignment.assignee_id(), None);
    assert_eq!(task.assignment.cohort_id(), Some(cohort));
}

#[test]
fn test_soft_delete_records_actor() {
    let mut task = make_task(Assignment::Individual(Uuid::new_v4()));
    let admin = Uuid::new_v4();

    task.soft_delete(admin);
    assert!(!task.active);
    assert_eq!(task.deleted_by, Some(admin));
    assert!(task.deleted_at.is_some());
}

#[test]
fn test_time_log_rejects_zero_minutes() {
    let mut task = make_task(Assignment::Individual(Uuid::new_v4()));
    assert!(task.add_time_log(Uuid::new_v4(), 0, None).is_err());
    task.add_time_log(Uuid::new_v4(), 90, Some("pairing".to_string()))
        .expect("log");
    assert_eq!(task.time_logs.len(), 1);
}
