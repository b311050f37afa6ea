// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::compliance::checker::{CheckerError, ComplianceChecker, LeadContext};
use crate::domain::models::check_result::ComplianceCheckResult;
use crate::domain::models::dnc_entry::{DncEntry, NewDncEntry};
use crate::domain::models::phone;
use crate::domain::repositories::dnc_repository::DncRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

const SOURCE: &str = "Internal DNC List";

/// Tally of one bulk opt-out import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BulkAddOutcome {
    pub added: u64,
    pub invalid: u64,
    pub failed: u64,
}

/// The in-house blocklist, first in the checker chain.
///
/// Unlike the vendor checkers this one is also writable: opt-outs land
/// here through [`add_to_dnc`](Self::add_to_dnc), and the bulk scrubber
/// reads it through [`bulk_check_numbers`](Self::bulk_check_numbers)
/// with one store round trip per batch.
pub struct InternalDncChecker {
    repository: Arc<dyn DncRepository>,
}

impl InternalDncChecker {
    pub fn new(repository: Arc<dyn DncRepository>) -> Self {
        Self { repository }
    }

    /// Add one phone number to the blocklist.
    ///
    /// The number is normalized before storage; re-adding an existing
    /// number refreshes its metadata and reactivates it.
    pub async fn add_to_dnc(&self, mut entry: NewDncEntry) -> Result<DncEntry, CheckerError> {
        let normalized = phone::normalize(&entry.phone_number);
        if !phone::is_canonical(&normalized) {
            return Err(CheckerError::Validation(format!(
                "'{}' does not normalize to a valid 10-digit US number",
                entry.phone_number
            )));
        }
        entry.phone_number = normalized.clone();

        let stored = self
            .repository
            .upsert(entry)
            .await
            .map_err(|e| CheckerError::Network(e.to_string()))?;

        info!("Added {} to internal DNC list", normalized);
        Ok(stored)
    }

    /// Add many phone numbers, tolerating per-entry failures.
    ///
    /// Invalid numbers and store failures are tallied instead of
    /// aborting the import, so one bad row never loses the rest of an
    /// opt-out file.
    pub async fn bulk_add_to_dnc(&self, entries: Vec<NewDncEntry>) -> BulkAddOutcome {
        let mut outcome = BulkAddOutcome::default();

        for entry in entries {
            match self.add_to_dnc(entry).await {
                Ok(_) => outcome.added += 1,
                Err(CheckerError::Validation(msg)) => {
                    warn!("Skipping invalid bulk DNC entry: {}", msg);
                    outcome.invalid += 1;
                }
                Err(e) => {
                    warn!("Failed to store bulk DNC entry: {}", e);
                    outcome.failed += 1;
                }
            }
        }

        info!(
            "Bulk DNC import complete: {} added, {} invalid, {} failed",
            outcome.added, outcome.invalid, outcome.failed
        );
        outcome
    }

    /// Check a batch of already-normalized phone numbers in one store
    /// round trip.
    ///
    /// Returns a result per input phone, compliant entries included, so
    /// callers can distinguish "checked and clean" from "not checked".
    pub async fn bulk_check_numbers(
        &self,
        phones: &[String],
    ) -> Result<HashMap<String, ComplianceCheckResult>, CheckerError> {
        let matches = self
            .repository
            .find_active_in(phones)
            .await
            .map_err(|e| CheckerError::Network(e.to_string()))?;

        let mut blocked: HashMap<String, DncEntry> = matches
            .into_iter()
            .map(|entry| (entry.phone_number.clone(), entry))
            .collect();

        let mut results = HashMap::with_capacity(phones.len());
        for phone in phones {
            let result = match blocked.remove(phone) {
                Some(entry) => Self::blocked_result(&entry),
                None => ComplianceCheckResult::compliant(SOURCE),
            };
            results.insert(phone.clone(), result);
        }

        Ok(results)
    }

    fn blocked_result(entry: &DncEntry) -> ComplianceCheckResult {
        let result = ComplianceCheckResult::non_compliant(
            SOURCE,
            vec![format!(
                "Number found on internal DNC list (reason: {})",
                entry.reason
            )],
        );
        match serde_json::to_value(entry) {
            Ok(raw) => result.with_raw_response(raw),
            Err(_) => result,
        }
    }
}

#[async_trait]
impl ComplianceChecker for InternalDncChecker {
    async fn check_number(
        &self,
        phone: &str,
        _context: Option<&LeadContext>,
    ) -> Result<ComplianceCheckResult, CheckerError> {
        let normalized = phone::normalize(phone);
        if !phone::is_canonical(&normalized) {
            return Err(CheckerError::Validation(format!(
                "'{}' does not normalize to a valid 10-digit US number",
                phone
            )));
        }

        let entry = self
            .repository
            .find_active_by_phone(&normalized)
            .await
            .map_err(|e| CheckerError::Network(e.to_string()))?;

        Ok(match entry {
            Some(entry) => Self::blocked_result(&entry),
            None => ComplianceCheckResult::compliant(SOURCE),
        })
    }

    fn name(&self) -> &'static str {
        SOURCE
    }
}
