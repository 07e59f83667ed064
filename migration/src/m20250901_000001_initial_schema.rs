use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create colleges table
        manager
            .create_table(
                Table::create()
                    .table(Colleges::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Colleges::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Colleges::Name).string().not_null())
                    .col(ColumnDef::new(Colleges::Active).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(Colleges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create cohorts table
        manager
            .create_table(
                Table::create()
                    .table(Cohorts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cohorts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cohorts::Name).string().not_null())
                    .col(ColumnDef::new(Cohorts::CollegeId).uuid())
                    .col(ColumnDef::new(Cohorts::StartDate).date())
                    .col(ColumnDef::new(Cohorts::EndDate).date())
                    .col(ColumnDef::new(Cohorts::Active).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(Cohorts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::ProviderId).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::CollegeId).uuid())
                    .col(ColumnDef::new(Users::CohortId).uuid())
                    .col(ColumnDef::new(Users::Active).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create sessions table
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sessions::Token).string().not_null().primary_key())
                    .col(ColumnDef::new(Sessions::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Sessions::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tasks table
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tasks::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tasks::Title).string().not_null())
                    .col(ColumnDef::new(Tasks::Description).text().not_null())
                    .col(ColumnDef::new(Tasks::Status).string().not_null())
                    .col(ColumnDef::new(Tasks::Priority).string().not_null())
                    .col(ColumnDef::new(Tasks::Category).string().not_null())
                    .col(ColumnDef::new(Tasks::AssigneeId).uuid())
                    .col(ColumnDef::new(Tasks::CohortId).uuid())
                    .col(ColumnDef::new(Tasks::Points).integer().not_null().default(10))
                    .col(
                        ColumnDef::new(Tasks::DueDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tasks::Progress).integer().not_null().default(0))
                    .col(ColumnDef::new(Tasks::Subtasks).json().not_null())
                    .col(ColumnDef::new(Tasks::Comments).json().not_null())
                    .col(ColumnDef::new(Tasks::TimeLogs).json().not_null())
                    .col(ColumnDef::new(Tasks::Submissions).json().not_null())
                    .col(ColumnDef::new(Tasks::CreatedBy).uuid().not_null())
                    .col(ColumnDef::new(Tasks::CompletedBy).uuid())
                    .col(ColumnDef::new(Tasks::CompletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Tasks::Active).boolean().not_null().default(true))
                    .col(ColumnDef::new(Tasks::DeletedBy).uuid())
                    .col(ColumnDef::new(Tasks::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Tasks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Tasks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create task_progress table
        manager
            .create_table(
                Table::create()
                    .table(TaskProgress::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TaskProgress::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TaskProgress::TaskId).uuid().not_null())
                    .col(ColumnDef::new(TaskProgress::InternId).uuid().not_null())
                    .col(ColumnDef::new(TaskProgress::Status).string().not_null())
                    .col(ColumnDef::new(TaskProgress::Progress).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(TaskProgress::PointsEarned)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(TaskProgress::SubmissionUrl).string())
                    .col(ColumnDef::new(TaskProgress::SubmissionNote).string())
                    .col(ColumnDef::new(TaskProgress::TimeLogs).json().not_null())
                    .col(ColumnDef::new(TaskProgress::Feedback).string())
                    .col(ColumnDef::new(TaskProgress::ReviewedBy).uuid())
                    .col(
                        ColumnDef::new(TaskProgress::NeedsHelp)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(TaskProgress::CompletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(TaskProgress::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TaskProgress::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create attendance table
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Attendance::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Attendance::UserId).uuid().not_null())
                    .col(ColumnDef::new(Attendance::Date).date().not_null())
                    .col(ColumnDef::new(Attendance::CheckIn).timestamp_with_time_zone())
                    .col(ColumnDef::new(Attendance::CheckOut).timestamp_with_time_zone())
                    .col(ColumnDef::new(Attendance::Status).string().not_null())
                    .col(
                        ColumnDef::new(Attendance::WorkingHours)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Attendance::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Attendance::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TaskProgress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cohorts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Colleges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Colleges {
    Table,
    Id,
    Name,
    Active,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Cohorts {
    Table,
    Id,
    Name,
    CollegeId,
    StartDate,
    EndDate,
    Active,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    ProviderId,
    Email,
    DisplayName,
    Role,
    CollegeId,
    CohortId,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Token,
    UserId,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    Title,
    Description,
    Status,
    Priority,
    Category,
    AssigneeId,
    CohortId,
    Points,
    DueDate,
    Progress,
    Subtasks,
    Comments,
    TimeLogs,
    Submissions,
    CreatedBy,
    CompletedBy,
    CompletedAt,
    Active,
    DeletedBy,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TaskProgress {
    Table,
    Id,
    TaskId,
    InternId,
    Status,
    Progress,
    PointsEarned,
    SubmissionUrl,
    SubmissionNote,
    TimeLogs,
    Feedback,
    ReviewedBy,
    NeedsHelp,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    UserId,
    Date,
    CheckIn,
    CheckOut,
    Status,
    WorkingHours,
    CreatedAt,
    UpdatedAt,
}
