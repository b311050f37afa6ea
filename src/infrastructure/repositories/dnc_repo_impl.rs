// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dnc_entry::{DncEntry, DncStatus, NewDncEntry};
use crate::domain::repositories::dnc_repository::DncRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::dnc_entry as dnc_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

/// SeaORM-backed internal DNC store.
///
/// The table is keyed on the canonical 10-digit phone number, so a
/// repeated opt-out for the same line updates the existing row instead
/// of duplicating it.
#[derive(Clone)]
pub struct DncRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl DncRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<dnc_entity::Model> for DncEntry {
    fn from(model: dnc_entity::Model) -> Self {
        Self {
            phone_number: model.phone_number,
            reason: model.reason,
            source: model.source,
            added_by: model.added_by,
            added_at: model.added_at,
            status: model.status.parse().unwrap_or_default(),
        }
    }
}

#[async_trait]
impl DncRepository for DncRepositoryImpl {
    async fn find_active_by_phone(&self, phone: &str) -> Result<Option<DncEntry>, RepositoryError> {
        let model = dnc_entity::Entity::find_by_id(phone.to_string())
            .filter(dnc_entity::Column::Status.eq(DncStatus::Active.to_string()))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_active_in(&self, phones: &[String]) -> Result<Vec<DncEntry>, RepositoryError> {
        if phones.is_empty() {
            return Ok(Vec::new());
        }

        let models = dnc_entity::Entity::find()
            .filter(dnc_entity::Column::PhoneNumber.is_in(phones.iter().cloned()))
            .filter(dnc_entity::Column::Status.eq(DncStatus::Active.to_string()))
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn upsert(&self, entry: NewDncEntry) -> Result<DncEntry, RepositoryError> {
        let now = Utc::now().into();
        let model = dnc_entity::ActiveModel {
            phone_number: Set(entry.phone_number.clone()),
            reason: Set(entry.reason_or_default()),
            source: Set(entry.source_or_default()),
            added_by: Set(entry.added_by_or_default()),
            status: Set(DncStatus::Active.to_string()),
            added_at: Set(now),
        };

        // Re-adding a number reactivates it and refreshes the metadata,
        // keeping the original added_at.
        dnc_entity::Entity::insert(model)
            .on_conflict(
                OnConflict::column(dnc_entity::Column::PhoneNumber)
                    .update_columns([
                        dnc_entity::Column::Reason,
                        dnc_entity::Column::Source,
                        dnc_entity::Column::AddedBy,
                        dnc_entity::Column::Status,
                    ])
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await?;

        let stored = dnc_entity::Entity::find_by_id(entry.phone_number.clone())
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(stored.into())
    }

    async fn set_status(
        &self,
        phone: &str,
        status: DncStatus,
    ) -> Result<DncEntry, RepositoryError> {
        let model = dnc_entity::Entity::find_by_id(phone.to_string())
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut active: dnc_entity::ActiveModel = model.into();
        active.status = Set(status.to_string());
        let updated = active.update(self.db.as_ref()).await?;

        Ok(updated.into())
    }
}
