use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Unique per (task, intern) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_task_progress_task_intern")
                    .table(TaskProgress::Table)
                    .col(TaskProgress::TaskId)
                    .col(TaskProgress::InternId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Unique per (user, date) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_user_date")
                    .table(Attendance::Table)
                    .col(Attendance::UserId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_assignee")
                    .table(Tasks::Table)
                    .col(Tasks::AssigneeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_cohort")
                    .table(Tasks::Table)
                    .col(Tasks::CohortId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_role_cohort")
                    .table(Users::Table)
                    .col(Users::Role)
                    .col(Users::CohortId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_task_progress_intern")
                    .table(TaskProgress::Table)
                    .col(TaskProgress::InternId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_task_progress_intern")
                    .table(TaskProgress::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_users_role_cohort")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tasks_cohort")
                    .table(Tasks::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_tasks_assignee")
                    .table(Tasks::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_user_date")
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_task_progress_task_intern")
                    .table(TaskProgress::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    AssigneeId,
    CohortId,
}

#[derive(DeriveIden)]
enum TaskProgress {
    Table,
    TaskId,
    InternId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Role,
    CohortId,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    UserId,
    Date,
}
