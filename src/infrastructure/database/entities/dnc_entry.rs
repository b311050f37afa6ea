// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dnc_entries")]
pub struct Model {
    /// Canonical 10-digit phone number
    #[sea_orm(primary_key, auto_increment = false)]
    pub phone_number: String,
    pub reason: String,
    pub source: String,
    pub added_by: String,
    pub status: String,
    pub added_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
