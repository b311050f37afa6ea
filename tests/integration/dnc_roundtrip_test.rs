// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::MemoryDncRepository;
use scrubrs::domain::compliance::checker::{CheckerError, ComplianceChecker};
use scrubrs::domain::models::dnc_entry::{DncStatus, NewDncEntry};
use scrubrs::domain::repositories::dnc_repository::DncRepository;
use scrubrs::domain::repositories::RepositoryError;
use scrubrs::infrastructure::checkers::internal_dnc::InternalDncChecker;
use std::sync::Arc;

fn entry(phone: &str) -> NewDncEntry {
    NewDncEntry {
        phone_number: phone.to_string(),
        reason: Some("User opted out".to_string()),
        source: None,
        added_by: None,
    }
}

#[tokio::test]
async fn test_added_number_matches_every_formatting_variant() {
    let checker = InternalDncChecker::new(Arc::new(MemoryDncRepository::new()));

    let stored = checker.add_to_dnc(entry("(555) 123-4567")).await.unwrap();
    assert_eq!(stored.phone_number, "5551234567");

    for variant in ["5551234567", "15551234567", "(555) 123-4567", "555-123-4567"] {
        let result = checker.check_number(variant, None).await.unwrap();
        assert!(!result.is_compliant, "variant {} should match", variant);
        assert!(result.reasons[0].contains("User opted out"));
    }
}

#[tokio::test]
async fn test_unlisted_number_is_compliant() {
    let checker = InternalDncChecker::new(Arc::new(MemoryDncRepository::new()));
    checker.add_to_dnc(entry("5551234567")).await.unwrap();

    let result = checker.check_number("5559876543", None).await.unwrap();
    assert!(result.is_compliant);
}

#[tokio::test]
async fn test_invalid_number_is_rejected_not_stored() {
    let checker = InternalDncChecker::new(Arc::new(MemoryDncRepository::new()));

    let err = checker.add_to_dnc(entry("123")).await.unwrap_err();
    assert!(matches!(err, CheckerError::Validation(_)));
}

#[tokio::test]
async fn test_bulk_import_tallies_invalid_entries() {
    let checker = InternalDncChecker::new(Arc::new(MemoryDncRepository::new()));

    let outcome = checker
        .bulk_add_to_dnc(vec![
            entry("5551234567"),
            entry("(555) 987-6543"),
            entry("bogus"),
        ])
        .await;

    assert_eq!(outcome.added, 2);
    assert_eq!(outcome.invalid, 1);
    assert_eq!(outcome.failed, 0);
}

#[tokio::test]
async fn test_deactivated_entry_is_no_longer_enforced() {
    let repo = Arc::new(MemoryDncRepository::new());
    let checker = InternalDncChecker::new(repo.clone());
    checker.add_to_dnc(entry("5551234567")).await.unwrap();

    let updated = repo
        .set_status("5551234567", DncStatus::Inactive)
        .await
        .unwrap();
    assert_eq!(updated.status, DncStatus::Inactive);

    // The entry stays on file but no longer blocks the number
    let result = checker.check_number("5551234567", None).await.unwrap();
    assert!(result.is_compliant);

    // Re-adding the number reactivates it
    checker.add_to_dnc(entry("5551234567")).await.unwrap();
    let result = checker.check_number("5551234567", None).await.unwrap();
    assert!(!result.is_compliant);
}

#[tokio::test]
async fn test_status_change_on_unknown_number_is_not_found() {
    let repo = MemoryDncRepository::new();

    let err = repo
        .set_status("5550000000", DncStatus::Inactive)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
async fn test_bulk_check_covers_every_input_phone() {
    let checker = InternalDncChecker::new(Arc::new(MemoryDncRepository::new()));
    checker.add_to_dnc(entry("5551234567")).await.unwrap();

    let phones = vec!["5551234567".to_string(), "5559876543".to_string()];
    let results = checker.bulk_check_numbers(&phones).await.unwrap();

    assert_eq!(results.len(), 2);
    assert!(!results["5551234567"].is_compliant);
    assert!(results["5559876543"].is_compliant);
}
