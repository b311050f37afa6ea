// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// How one lead was classified during a scrub run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadClassification {
    /// No blocklist match; safe to dial
    Clean,
    /// Matched a blocklist entry
    Dnc,
    /// Phone did not normalize to 10 digits; never sent to a blocklist
    InvalidPhone,
}

impl fmt::Display for LeadClassification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LeadClassification::Clean => write!(f, "Clean"),
            LeadClassification::Dnc => write!(f, "DNC"),
            LeadClassification::InvalidPhone => write!(f, "Invalid Phone"),
        }
    }
}

/// One ledger row per lead visited by a scrub run.
///
/// Rows are created once and never mutated afterwards; the full ledger is
/// handed to the reporter when the run completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubLedgerRow {
    pub lead_id: Uuid,
    /// Raw phone as stored on the lead
    pub phone: String,
    pub classification: LeadClassification,
    pub reasons: Vec<String>,
    pub sources: Vec<String>,
}

/// Final output of one bulk scrub run: the full ledger plus counters.
///
/// Invariant: `total_leads` equals `leads.len()` — exactly one row per
/// visited lead, no duplicates, no silent drops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubReport {
    pub list_id: String,
    pub date_range: String,
    pub total_leads: u64,
    pub dnc_leads: u64,
    pub clean_leads: u64,
    /// Percentage string with two decimals, e.g. "3.08%"
    pub dnc_rate: String,
    pub leads: Vec<ScrubLedgerRow>,
}
