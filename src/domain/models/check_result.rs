// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one blocklist source for one phone number.
///
/// Ephemeral: created per request, folded into an
/// [`AggregateComplianceReport`] and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceCheckResult {
    /// Source the result is attributed to (e.g. "Internal DNC List")
    pub source: String,
    /// Whether this source considers the number safe to contact
    pub is_compliant: bool,
    /// Why the source flagged the number; empty when compliant
    pub reasons: Vec<String>,
    /// Opaque vendor payload, kept for audit visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<serde_json::Value>,
    /// Populated when the check itself failed and was folded fail-closed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComplianceCheckResult {
    /// A passing result for `source`.
    pub fn compliant(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            is_compliant: true,
            reasons: Vec::new(),
            raw_response: None,
            error: None,
        }
    }

    /// A blocking result for `source` with the vendor-provided reasons.
    pub fn non_compliant(source: impl Into<String>, reasons: Vec<String>) -> Self {
        Self {
            source: source.into(),
            is_compliant: false,
            reasons,
            raw_response: None,
            error: None,
        }
    }

    /// A blocking result representing a check that could not complete.
    ///
    /// Ambiguity is legal exposure: an errored or timed-out check is
    /// always reported as non-compliant, with the failure message in
    /// both `reasons` and `error`.
    pub fn fail_closed(source: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            source: source.into(),
            is_compliant: false,
            reasons: vec![message.clone()],
            raw_response: None,
            error: Some(message),
        }
    }

    /// Attach the raw vendor payload.
    pub fn with_raw_response(mut self, raw: serde_json::Value) -> Self {
        self.raw_response = Some(raw);
        self
    }
}

/// A non-compliant source with its reasons, as listed in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedSource {
    pub source: String,
    pub reasons: Vec<String>,
}

/// Verdict for one phone number across every configured source.
///
/// `per_source_results` is always in the fixed checker configuration
/// order, independent of which source settled first, so reports are
/// reproducible across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateComplianceReport {
    pub phone_number: String,
    /// Logical AND over every per-source result
    pub is_compliant: bool,
    pub per_source_results: Vec<ComplianceCheckResult>,
    pub failed_sources: Vec<FailedSource>,
    pub timestamp: DateTime<Utc>,
}
