// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dnc_entry::{DncEntry, DncStatus, NewDncEntry};
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// DNC blocklist store interface.
///
/// Callers pass normalized 10-digit phone keys; the store matches
/// exactly on that key. `upsert` is the sole mutator of entry content
/// and must be safe under concurrent writers (upsert keyed by
/// normalized phone, last-write-wins on reason/source/added_by).
#[async_trait]
pub trait DncRepository: Send + Sync {
    /// Find the active entry for one normalized phone, if any
    async fn find_active_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<DncEntry>, RepositoryError>;

    /// Find every active entry matching the given normalized phones.
    ///
    /// One round trip regardless of how many phones are passed; this is
    /// what keeps bulk scrubbing at O(batches) lookups.
    async fn find_active_in(&self, phones: &[String]) -> Result<Vec<DncEntry>, RepositoryError>;

    /// Insert or refresh an entry keyed by normalized phone
    async fn upsert(&self, entry: NewDncEntry) -> Result<DncEntry, RepositoryError>;

    /// Change an entry's status; the only field mutable after creation
    async fn set_status(
        &self,
        phone: &str,
        status: DncStatus,
    ) -> Result<DncEntry, RepositoryError>;
}
