// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub category: String,
    pub assignee_id: Option<Uuid>,
    pub cohort_id: Option<Uuid>,
    pub points: i32,
    pub due_date: ChronoDateTimeWithTimeZone,
    pub progress: i32,
    pub subtasks: Json,
    pub comments: Json,
    pub time_logs: Json,
    pub submissions: Json,
    pub created_by: Uuid,
    pub completed_by: Option<Uuid>,
    pub completed_at: Option<ChronoDateTimeWithTimeZone>,
    pub active: bool,
    pub deleted_by: Option<Uuid>,
    pub deleted_at: Option<ChronoDateTimeWithTimeZone>,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
