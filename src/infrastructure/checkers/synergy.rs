// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SynergySettings;
use crate::domain::compliance::checker::{CheckerError, ComplianceChecker, LeadContext};
use crate::domain::models::check_result::ComplianceCheckResult;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SOURCE: &str = "Synergy DNC";

#[derive(Debug, Serialize)]
struct SynergyRequest<'a> {
    caller_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct SynergyResponse {
    rejection_reason: Option<String>,
}

/// Dialer-side rejection feed exposed by the Synergy platform.
///
/// Synergy has no dedicated DNC endpoint; its API reports a free-text
/// `rejection_reason`, and a DNC listing is signalled by a "dnc" token
/// somewhere inside it. The substring match is the vendor's contract,
/// fragile as it is.
pub struct SynergyDncChecker {
    client: reqwest::Client,
    api_url: String,
}

impl SynergyDncChecker {
    pub fn new(settings: &SynergySettings, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_url: settings.api_url.clone(),
        }
    }
}

#[async_trait]
impl ComplianceChecker for SynergyDncChecker {
    async fn check_number(
        &self,
        phone: &str,
        _context: Option<&LeadContext>,
    ) -> Result<ComplianceCheckResult, CheckerError> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&SynergyRequest { caller_id: phone })
            .send()
            .await
            .map_err(super::transport_error)?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(CheckerError::RateLimit),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CheckerError::Auth(format!(
                    "Synergy API rejected credentials (HTTP {})",
                    response.status()
                )))
            }
            status if !status.is_success() => {
                return Err(CheckerError::Network(format!(
                    "Synergy API returned HTTP {}",
                    status
                )))
            }
            _ => {}
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CheckerError::Parse(e.to_string()))?;
        let parsed: SynergyResponse = serde_json::from_value(raw.clone())
            .map_err(|e| CheckerError::Parse(e.to_string()))?;

        let dnc_reason = parsed
            .rejection_reason
            .filter(|reason| reason.to_lowercase().contains("dnc"));

        let result = match dnc_reason {
            Some(reason) => ComplianceCheckResult::non_compliant(
                SOURCE,
                vec![format!(
                    "Number found on Synergy DNC list (rejection_reason: {})",
                    reason
                )],
            ),
            None => ComplianceCheckResult::compliant(SOURCE),
        };

        Ok(result.with_raw_response(raw))
    }

    fn name(&self) -> &'static str {
        SOURCE
    }
}
