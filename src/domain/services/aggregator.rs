// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::compliance::checker::{ComplianceChecker, LeadContext};
use crate::domain::models::check_result::{
    AggregateComplianceReport, ComplianceCheckResult, FailedSource,
};
use crate::domain::models::phone;
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Source name for the local phone-format validity check.
pub const PHONE_VALIDATION_SOURCE: &str = "Phone Validation";

/// Fans one phone number out to every configured blocklist source
/// concurrently and folds the settled outcomes into a single verdict.
///
/// The checker list is fixed at construction and defines the report
/// order. A verdict always waits for the slowest checker — one slow
/// vendor stalls the whole report. That is deliberate: the only
/// mitigation is the per-checker timeout, which resolves fail-closed,
/// never skipping a source.
pub struct ComplianceAggregator {
    checkers: Vec<Arc<dyn ComplianceChecker>>,
    checker_timeout: Duration,
}

impl ComplianceAggregator {
    pub fn new(checkers: Vec<Arc<dyn ComplianceChecker>>, checker_timeout_ms: u64) -> Self {
        Self {
            checkers,
            checker_timeout: Duration::from_millis(checker_timeout_ms),
        }
    }

    /// Check one phone number against every configured source.
    ///
    /// All checker calls launch concurrently and every call is awaited to
    /// settlement — one checker's failure never prevents collecting the
    /// others' results. Errors and timeouts fold into non-compliant
    /// results at this boundary; this method itself never fails.
    pub async fn check_phone_compliance(
        &self,
        phone_number: &str,
        context: Option<&LeadContext>,
    ) -> AggregateComplianceReport {
        debug!("Running compliance checks for {}", phone_number);

        let futures = self.checkers.iter().enumerate().map(|(index, checker)| {
            let checker = checker.clone();
            let phone = phone_number.to_string();
            let context = context.cloned();
            let timeout = self.checker_timeout;

            async move {
                let name = checker.name();
                let outcome =
                    tokio::time::timeout(timeout, checker.check_number(&phone, context.as_ref()))
                        .await;

                let result = match outcome {
                    Ok(Ok(result)) => {
                        metrics::counter!("compliance_checks_total", "source" => name, "outcome" => "ok")
                            .increment(1);
                        result
                    }
                    Ok(Err(e)) => {
                        warn!("Checker {} failed: {}", name, e);
                        metrics::counter!("compliance_checks_total", "source" => name, "outcome" => "error")
                            .increment(1);
                        ComplianceCheckResult::fail_closed(name, e.to_string())
                    }
                    Err(_) => {
                        warn!("Checker {} timed out after {}ms", name, timeout.as_millis());
                        metrics::counter!("compliance_checks_total", "source" => name, "outcome" => "timeout")
                            .increment(1);
                        ComplianceCheckResult::fail_closed(
                            name,
                            format!("Check timed out after {}ms", timeout.as_millis()),
                        )
                    }
                };

                (index, result)
            }
        });

        let mut settled: Vec<(usize, ComplianceCheckResult)> = join_all(futures).await;
        // Report order must match checker configuration order, never
        // completion order.
        settled.sort_by_key(|(index, _)| *index);

        let mut per_source_results = Vec::with_capacity(settled.len() + 1);
        per_source_results.push(Self::check_phone_format(phone_number));
        per_source_results.extend(settled.into_iter().map(|(_, result)| result));

        let is_compliant = per_source_results.iter().all(|r| r.is_compliant);
        let failed_sources = per_source_results
            .iter()
            .filter(|r| !r.is_compliant)
            .map(|r| FailedSource {
                source: r.source.clone(),
                reasons: r.reasons.clone(),
            })
            .collect();

        AggregateComplianceReport {
            phone_number: phone_number.to_string(),
            is_compliant,
            per_source_results,
            failed_sources,
            timestamp: Utc::now(),
        }
    }

    /// Check several phone numbers concurrently.
    pub async fn check_phone_numbers(
        &self,
        phone_numbers: &[String],
        context: Option<&LeadContext>,
    ) -> Vec<AggregateComplianceReport> {
        join_all(
            phone_numbers
                .iter()
                .map(|phone| self.check_phone_compliance(phone, context)),
        )
        .await
    }

    /// Local line-format validity check, reported as one more source.
    fn check_phone_format(phone_number: &str) -> ComplianceCheckResult {
        let normalized = phone::normalize(phone_number);
        if phone::is_canonical(&normalized) {
            ComplianceCheckResult::compliant(PHONE_VALIDATION_SOURCE)
        } else {
            ComplianceCheckResult::non_compliant(
                PHONE_VALIDATION_SOURCE,
                vec![format!(
                    "'{}' does not normalize to a valid 10-digit US number",
                    phone_number
                )],
            )
        }
    }
}
