// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::Lead;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// Position of the scrub cursor after a fetched page.
///
/// The `(created_at, id)` pair is strictly monotonic under the page
/// ordering, so advancing it guarantees every row is visited exactly
/// once even while new leads are inserted into the same range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadCursor {
    pub created_at: DateTime<FixedOffset>,
    pub id: Uuid,
}

/// One page request against the lead store.
#[derive(Debug, Clone)]
pub struct LeadPageQuery {
    pub list_id: String,
    /// Inclusive lower bound on `created_at`
    pub created_after: DateTime<FixedOffset>,
    /// Exclusive upper bound on `created_at`
    pub created_before: DateTime<FixedOffset>,
    /// `None` on the first page; thereafter the last row of the previous page
    pub cursor: Option<LeadCursor>,
    pub batch_size: u64,
}

/// Read-only lead store interface.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Fetch the next page of leads in `(created_at, id)` order, strictly
    /// after the cursor when one is set. Returns at most `batch_size` rows.
    async fn fetch_page(&self, query: &LeadPageQuery) -> Result<Vec<Lead>, RepositoryError>;
}
