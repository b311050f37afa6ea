// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::Lead;
use crate::domain::repositories::lead_repository::{LeadPageQuery, LeadRepository};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::lead as lead_entity;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

/// SeaORM-backed read-only view of the lead store.
#[derive(Clone)]
pub struct LeadRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl LeadRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<lead_entity::Model> for Lead {
    fn from(model: lead_entity::Model) -> Self {
        Self {
            id: model.id,
            phone: model.phone,
            list_id: model.list_id,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl LeadRepository for LeadRepositoryImpl {
    async fn fetch_page(&self, query: &LeadPageQuery) -> Result<Vec<Lead>, RepositoryError> {
        let mut select = lead_entity::Entity::find()
            .filter(lead_entity::Column::ListId.eq(query.list_id.clone()))
            .filter(lead_entity::Column::CreatedAt.gte(query.created_after))
            .filter(lead_entity::Column::CreatedAt.lt(query.created_before));

        // Keyset predicate: (created_at, id) strictly greater than the
        // cursor under the page ordering.
        if let Some(cursor) = &query.cursor {
            select = select.filter(
                Condition::any()
                    .add(lead_entity::Column::CreatedAt.gt(cursor.created_at))
                    .add(
                        Condition::all()
                            .add(lead_entity::Column::CreatedAt.eq(cursor.created_at))
                            .add(lead_entity::Column::Id.gt(cursor.id)),
                    ),
            );
        }

        let models = select
            .order_by_asc(lead_entity::Column::CreatedAt)
            .order_by_asc(lead_entity::Column::Id)
            .limit(query.batch_size)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
