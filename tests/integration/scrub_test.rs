// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{lead, FailingLeadRepository, MemoryDncRepository, MemoryLeadRepository};
use chrono::NaiveDate;
use scrubrs::domain::models::dnc_entry::NewDncEntry;
use scrubrs::domain::models::scrub::LeadClassification;
use scrubrs::domain::repositories::dnc_repository::DncRepository;
use scrubrs::domain::services::scrub_service::{BulkDncScrubber, ScrubError, ScrubParams};
use scrubrs::infrastructure::checkers::internal_dnc::InternalDncChecker;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

fn params(list_id: &str) -> ScrubParams {
    ScrubParams {
        list_id: list_id.to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
    }
}

async fn seed_dnc(repo: &MemoryDncRepository, phones: impl IntoIterator<Item = String>) {
    for phone in phones {
        repo.upsert(NewDncEntry {
            phone_number: phone,
            reason: None,
            source: Some("dialer".to_string()),
            added_by: None,
        })
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn test_large_list_paginates_and_tallies() {
    let phones: Vec<String> = (0..1200).map(|i| format!("555{:07}", i)).collect();
    let leads = phones
        .iter()
        .enumerate()
        .map(|(i, phone)| lead("list-1", phone, i as i64))
        .collect();

    let dnc_repo = Arc::new(MemoryDncRepository::new());
    seed_dnc(&dnc_repo, phones.iter().take(37).cloned()).await;

    let scrubber = BulkDncScrubber::new(
        Arc::new(MemoryLeadRepository::with_leads(leads)),
        Arc::new(InternalDncChecker::new(dnc_repo.clone())),
        500,
        10_000,
    );

    let report = scrubber.scrub(&params("list-1")).await.unwrap();

    assert_eq!(report.total_leads, 1200);
    assert_eq!(report.dnc_leads, 37);
    assert_eq!(report.clean_leads, 1163);
    assert_eq!(report.dnc_rate, "3.08%");
    assert_eq!(report.leads.len(), 1200);
    assert_eq!(report.date_range, "2025-07-01 to 2025-07-31");
    // One bulk lookup per page, never one per lead
    assert_eq!(dnc_repo.lookup_sizes(), vec![500, 500, 200]);
}

#[tokio::test]
async fn test_every_lead_appears_exactly_once() {
    let leads: Vec<_> = (0..95)
        .map(|i| lead("list-2", &format!("555{:07}", i), i as i64))
        .collect();

    let scrubber = BulkDncScrubber::new(
        Arc::new(MemoryLeadRepository::with_leads(leads)),
        Arc::new(InternalDncChecker::new(Arc::new(MemoryDncRepository::new()))),
        10,
        10_000,
    );

    let report = scrubber.scrub(&params("list-2")).await.unwrap();

    let ids: HashSet<Uuid> = report.leads.iter().map(|row| row.lead_id).collect();
    assert_eq!(ids.len(), 95);
    assert_eq!(report.total_leads, 95);
}

#[tokio::test]
async fn test_unparseable_phones_classify_invalid() {
    let leads = vec![
        lead("list-3", "5551234567", 0),
        lead("list-3", "123", 1),
        lead("list-3", "", 2),
    ];

    let scrubber = BulkDncScrubber::new(
        Arc::new(MemoryLeadRepository::with_leads(leads)),
        Arc::new(InternalDncChecker::new(Arc::new(MemoryDncRepository::new()))),
        500,
        10_000,
    );

    let report = scrubber.scrub(&params("list-3")).await.unwrap();

    assert_eq!(report.total_leads, 3);
    assert_eq!(report.dnc_leads, 0);
    assert_eq!(report.clean_leads, 1);

    let invalid: Vec<_> = report
        .leads
        .iter()
        .filter(|row| row.classification == LeadClassification::InvalidPhone)
        .collect();
    assert_eq!(invalid.len(), 2);
    assert_eq!(invalid[0].reasons, vec!["Invalid or missing phone number"]);
}

#[tokio::test]
async fn test_dnc_rows_carry_reason_and_source() {
    let leads = vec![lead("list-4", "(555) 123-4567", 0)];

    let dnc_repo = Arc::new(MemoryDncRepository::new());
    seed_dnc(&dnc_repo, ["5551234567".to_string()]).await;

    let scrubber = BulkDncScrubber::new(
        Arc::new(MemoryLeadRepository::with_leads(leads)),
        Arc::new(InternalDncChecker::new(dnc_repo)),
        500,
        10_000,
    );

    let report = scrubber.scrub(&params("list-4")).await.unwrap();

    assert_eq!(report.dnc_leads, 1);
    let row = &report.leads[0];
    assert_eq!(row.classification, LeadClassification::Dnc);
    // The ledger keeps the phone as stored on the lead
    assert_eq!(row.phone, "(555) 123-4567");
    assert_eq!(row.sources, vec!["Internal DNC List"]);
    assert!(row.reasons[0].contains("internal DNC list"));
}

#[tokio::test]
async fn test_batch_cap_stops_the_run() {
    let leads: Vec<_> = (0..35)
        .map(|i| lead("list-5", &format!("555{:07}", i), i as i64))
        .collect();

    let scrubber = BulkDncScrubber::new(
        Arc::new(MemoryLeadRepository::with_leads(leads)),
        Arc::new(InternalDncChecker::new(Arc::new(MemoryDncRepository::new()))),
        10,
        2,
    );

    let report = scrubber.scrub(&params("list-5")).await.unwrap();

    assert_eq!(report.total_leads, 20);
}

#[tokio::test]
async fn test_fetch_failure_aborts_the_run() {
    let scrubber = BulkDncScrubber::new(
        Arc::new(FailingLeadRepository),
        Arc::new(InternalDncChecker::new(Arc::new(MemoryDncRepository::new()))),
        500,
        10_000,
    );

    let err = scrubber.scrub(&params("list-6")).await.unwrap_err();

    assert!(matches!(err, ScrubError::BatchFetch { batch: 1, .. }));
}

#[tokio::test]
async fn test_inverted_date_range_is_rejected() {
    let scrubber = BulkDncScrubber::new(
        Arc::new(MemoryLeadRepository::with_leads(Vec::new())),
        Arc::new(InternalDncChecker::new(Arc::new(MemoryDncRepository::new()))),
        500,
        10_000,
    );

    let err = scrubber
        .scrub(&ScrubParams {
            list_id: "list-7".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ScrubError::Validation(_)));
}
