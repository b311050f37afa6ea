// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, TimeZone, Utc};
use scrubrs::domain::compliance::checker::{CheckerError, ComplianceChecker, LeadContext};
use scrubrs::domain::models::check_result::ComplianceCheckResult;
use scrubrs::domain::models::dnc_entry::{DncEntry, DncStatus, NewDncEntry};
use scrubrs::domain::models::lead::Lead;
use scrubrs::domain::repositories::dnc_repository::DncRepository;
use scrubrs::domain::repositories::lead_repository::{LeadPageQuery, LeadRepository};
use scrubrs::domain::repositories::RepositoryError;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// In-memory stand-in for the DNC store.
///
/// Records the size of every bulk lookup so tests can assert how many
/// store round trips a scrub run issued.
#[derive(Default)]
pub struct MemoryDncRepository {
    entries: Mutex<HashMap<String, DncEntry>>,
    lookup_sizes: Mutex<Vec<usize>>,
}

impl MemoryDncRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes of the `find_active_in` calls seen so far, in order.
    pub fn lookup_sizes(&self) -> Vec<usize> {
        self.lookup_sizes.lock().unwrap().clone()
    }
}

#[async_trait]
impl DncRepository for MemoryDncRepository {
    async fn find_active_by_phone(&self, phone: &str) -> Result<Option<DncEntry>, RepositoryError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(phone)
            .filter(|e| e.status == DncStatus::Active)
            .cloned())
    }

    async fn find_active_in(&self, phones: &[String]) -> Result<Vec<DncEntry>, RepositoryError> {
        self.lookup_sizes.lock().unwrap().push(phones.len());
        let entries = self.entries.lock().unwrap();
        Ok(phones
            .iter()
            .filter_map(|p| entries.get(p))
            .filter(|e| e.status == DncStatus::Active)
            .cloned()
            .collect())
    }

    async fn upsert(&self, entry: NewDncEntry) -> Result<DncEntry, RepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let added_at = entries
            .get(&entry.phone_number)
            .map(|existing| existing.added_at)
            .unwrap_or_else(|| Utc::now().into());

        let stored = DncEntry {
            phone_number: entry.phone_number.clone(),
            reason: entry.reason_or_default(),
            source: entry.source_or_default(),
            added_by: entry.added_by_or_default(),
            added_at,
            status: DncStatus::Active,
        };
        entries.insert(entry.phone_number, stored.clone());
        Ok(stored)
    }

    async fn set_status(
        &self,
        phone: &str,
        status: DncStatus,
    ) -> Result<DncEntry, RepositoryError> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get_mut(phone).ok_or(RepositoryError::NotFound)?;
        entry.status = status;
        Ok(entry.clone())
    }
}

/// In-memory stand-in for the lead store, honoring the keyset cursor
/// contract.
pub struct MemoryLeadRepository {
    leads: Mutex<Vec<Lead>>,
}

impl MemoryLeadRepository {
    pub fn with_leads(leads: Vec<Lead>) -> Self {
        Self {
            leads: Mutex::new(leads),
        }
    }
}

#[async_trait]
impl LeadRepository for MemoryLeadRepository {
    async fn fetch_page(&self, query: &LeadPageQuery) -> Result<Vec<Lead>, RepositoryError> {
        let leads = self.leads.lock().unwrap();
        let mut page: Vec<Lead> = leads
            .iter()
            .filter(|l| l.list_id == query.list_id)
            .filter(|l| l.created_at >= query.created_after && l.created_at < query.created_before)
            .filter(|l| match &query.cursor {
                Some(cursor) => {
                    (l.created_at, l.id) > (cursor.created_at, cursor.id)
                }
                None => true,
            })
            .cloned()
            .collect();
        page.sort_by_key(|l| (l.created_at, l.id));
        page.truncate(query.batch_size as usize);
        Ok(page)
    }
}

/// Lead store that always fails; used for abort-path tests.
pub struct FailingLeadRepository;

#[async_trait]
impl LeadRepository for FailingLeadRepository {
    async fn fetch_page(&self, _query: &LeadPageQuery) -> Result<Vec<Lead>, RepositoryError> {
        Err(RepositoryError::Database(DbErr::Custom(
            "connection reset".to_string(),
        )))
    }
}

/// How a stub checker settles.
pub enum StubBehavior {
    Compliant,
    NonCompliant(Vec<String>),
    Fail(CheckerError),
    /// Never settles within any reasonable test timeout
    Hang,
}

/// Scripted checker for aggregator tests.
pub struct StubChecker {
    pub name: &'static str,
    pub behavior: StubBehavior,
    pub delay: Duration,
}

impl StubChecker {
    pub fn new(name: &'static str, behavior: StubBehavior) -> Self {
        Self {
            name,
            behavior,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl ComplianceChecker for StubChecker {
    async fn check_number(
        &self,
        _phone: &str,
        _context: Option<&LeadContext>,
    ) -> Result<ComplianceCheckResult, CheckerError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.behavior {
            StubBehavior::Compliant => Ok(ComplianceCheckResult::compliant(self.name)),
            StubBehavior::NonCompliant(reasons) => Ok(ComplianceCheckResult::non_compliant(
                self.name,
                reasons.clone(),
            )),
            StubBehavior::Fail(e) => Err(e.clone()),
            StubBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(ComplianceCheckResult::compliant(self.name))
            }
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Build a lead created `offset_secs` after midnight on 2025-07-01 UTC.
pub fn lead(list_id: &str, phone: &str, offset_secs: i64) -> Lead {
    let base: DateTime<FixedOffset> = Utc
        .with_ymd_and_hms(2025, 7, 1, 0, 0, 0)
        .unwrap()
        .into();
    Lead {
        id: Uuid::new_v4(),
        phone: phone.to_string(),
        list_id: list_id.to_string(),
        created_at: base + ChronoDuration::seconds(offset_secs),
    }
}
