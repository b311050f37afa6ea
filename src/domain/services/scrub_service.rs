// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::compliance::checker::CheckerError;
use crate::domain::models::phone;
use crate::domain::models::scrub::{LeadClassification, ScrubLedgerRow, ScrubReport};
use crate::domain::repositories::lead_repository::{LeadCursor, LeadPageQuery, LeadRepository};
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::checkers::internal_dnc::InternalDncChecker;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Scrub run failure. Any failure is fatal for the whole run: the
/// partial ledger is discarded rather than reported as if complete,
/// and callers re-run from the start.
#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Failed to fetch lead batch {batch}: {source}")]
    BatchFetch {
        batch: u64,
        #[source]
        source: RepositoryError,
    },
    #[error("Bulk DNC lookup failed on batch {batch}: {source}")]
    BulkCheck {
        batch: u64,
        #[source]
        source: CheckerError,
    },
}

/// Parameters of one scrub run over a lead list.
#[derive(Debug, Clone)]
pub struct ScrubParams {
    pub list_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Matches a large lead set against the internal blocklist without
/// single-query timeouts.
///
/// The run paginates the lead store with a strictly-forward cursor and
/// issues exactly one bulk blocklist lookup per batch, so a list of N
/// leads costs `ceil(N / batch_size)` lookups rather than N.
pub struct BulkDncScrubber {
    leads: Arc<dyn LeadRepository>,
    internal_dnc: Arc<InternalDncChecker>,
    batch_size: u64,
    /// Hard cap on batch count; guards against a misbehaving store
    /// producing an endless page stream
    max_batches: u64,
}

impl BulkDncScrubber {
    pub fn new(
        leads: Arc<dyn LeadRepository>,
        internal_dnc: Arc<InternalDncChecker>,
        batch_size: u64,
        max_batches: u64,
    ) -> Self {
        Self {
            leads,
            internal_dnc,
            batch_size: batch_size.max(1),
            max_batches,
        }
    }

    /// Scrub every lead of `list_id` created within the date window.
    ///
    /// Produces exactly one ledger row per visited lead. Leads whose
    /// phone does not normalize to 10 digits classify `InvalidPhone`
    /// without touching any blocklist; the rest classify `Dnc` or
    /// `Clean` from one bulk lookup per batch.
    pub async fn scrub(&self, params: &ScrubParams) -> Result<ScrubReport, ScrubError> {
        if params.end_date < params.start_date {
            return Err(ScrubError::Validation(
                "end_date must not precede start_date".to_string(),
            ));
        }

        let created_after = to_fixed(params.start_date.and_time(NaiveTime::MIN));
        let end_exclusive = params
            .end_date
            .succ_opt()
            .ok_or_else(|| ScrubError::Validation("end_date out of range".to_string()))?;
        let created_before = to_fixed(end_exclusive.and_time(NaiveTime::MIN));

        info!(
            "Starting DNC scrub for list {} from {} to {}",
            params.list_id, params.start_date, params.end_date
        );

        let mut ledger: Vec<ScrubLedgerRow> = Vec::new();
        let mut cursor: Option<LeadCursor> = None;
        let mut total_processed: u64 = 0;
        let mut total_dnc: u64 = 0;
        let mut total_invalid: u64 = 0;
        let mut batch_num: u64 = 0;

        loop {
            if batch_num >= self.max_batches {
                warn!(
                    "Scrub for list {} hit the {}-batch safety cap; stopping",
                    params.list_id, self.max_batches
                );
                break;
            }

            let query = LeadPageQuery {
                list_id: params.list_id.clone(),
                created_after,
                created_before,
                cursor,
                batch_size: self.batch_size,
            };

            let batch = self
                .leads
                .fetch_page(&query)
                .await
                .map_err(|source| ScrubError::BatchFetch {
                    batch: batch_num + 1,
                    source,
                })?;

            if batch.is_empty() {
                break;
            }
            batch_num += 1;

            if let Some(last) = batch.last() {
                cursor = Some(LeadCursor {
                    created_at: last.created_at,
                    id: last.id,
                });
            }

            // One bulk lookup per batch covers every normalizable phone.
            let valid_phones: Vec<String> = batch
                .iter()
                .map(|lead| phone::normalize(&lead.phone))
                .filter(|p| phone::is_canonical(p))
                .collect();

            let bulk_results = self
                .internal_dnc
                .bulk_check_numbers(&valid_phones)
                .await
                .map_err(|source| ScrubError::BulkCheck {
                    batch: batch_num,
                    source,
                })?;

            let batch_len = batch.len() as u64;
            for lead in batch {
                total_processed += 1;
                let normalized = phone::normalize(&lead.phone);

                if !phone::is_canonical(&normalized) {
                    total_invalid += 1;
                    ledger.push(ScrubLedgerRow {
                        lead_id: lead.id,
                        phone: lead.phone,
                        classification: LeadClassification::InvalidPhone,
                        reasons: vec!["Invalid or missing phone number".to_string()],
                        sources: Vec::new(),
                    });
                    continue;
                }

                match bulk_results.get(&normalized) {
                    Some(result) if !result.is_compliant => {
                        total_dnc += 1;
                        ledger.push(ScrubLedgerRow {
                            lead_id: lead.id,
                            phone: lead.phone,
                            classification: LeadClassification::Dnc,
                            reasons: result.reasons.clone(),
                            sources: vec![result.source.clone()],
                        });
                    }
                    _ => {
                        ledger.push(ScrubLedgerRow {
                            lead_id: lead.id,
                            phone: lead.phone,
                            classification: LeadClassification::Clean,
                            reasons: Vec::new(),
                            sources: Vec::new(),
                        });
                    }
                }
            }

            info!(
                "Scrub batch {} complete: {} leads (total: {}, dnc: {}, invalid: {})",
                batch_num, batch_len, total_processed, total_dnc, total_invalid
            );
            metrics::counter!("scrub_batches_total").increment(1);
            metrics::counter!("scrub_leads_total").increment(batch_len);

            if batch_len < self.batch_size {
                break;
            }
        }

        let clean_leads = total_processed - total_dnc - total_invalid;
        let dnc_rate = if total_processed > 0 {
            format!(
                "{:.2}%",
                (total_dnc as f64) * 100.0 / (total_processed as f64)
            )
        } else {
            "0.00%".to_string()
        };

        info!(
            "Scrub complete for list {}: {}/{} leads are DNC ({})",
            params.list_id, total_dnc, total_processed, dnc_rate
        );

        debug_assert_eq!(total_processed as usize, ledger.len());

        Ok(ScrubReport {
            list_id: params.list_id.clone(),
            date_range: format!("{} to {}", params.start_date, params.end_date),
            total_leads: total_processed,
            dnc_leads: total_dnc,
            clean_leads,
            dnc_rate,
            leads: ledger,
        })
    }
}

fn to_fixed(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).into()
}
