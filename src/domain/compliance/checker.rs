// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::check_result::ComplianceCheckResult;
use async_trait::async_trait;
use thiserror::Error;

/// Checker-level failure taxonomy.
///
/// These never propagate past the aggregation boundary: every variant is
/// folded into a non-compliant [`ComplianceCheckResult`] (fail-closed).
#[derive(Debug, Error, Clone)]
pub enum CheckerError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Unexpected vendor payload: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Request timed out")]
    Timeout,
}

/// Optional lead attributes that refine a check.
///
/// Currently only the lead's US state, which the TCPA checker uses to
/// evaluate state-specific DNC rules.
#[derive(Debug, Clone, Default)]
pub struct LeadContext {
    /// Two-letter state code, uppercased
    pub state: Option<String>,
}

/// One blocklist source behind a uniform capability contract.
///
/// This is the pluggability seam for adding or removing blocklist
/// vendors: the aggregator only ever sees this trait.
#[async_trait]
pub trait ComplianceChecker: Send + Sync {
    /// Check a single phone number against this source.
    ///
    /// An `Err` means the check could not complete; the aggregator folds
    /// it into a non-compliant result. Implementations must not panic on
    /// vendor misbehavior — map it to a [`CheckerError`] instead.
    async fn check_number(
        &self,
        phone: &str,
        context: Option<&LeadContext>,
    ) -> Result<ComplianceCheckResult, CheckerError>;

    /// Stable source name used for attribution and logging.
    fn name(&self) -> &'static str;
}
