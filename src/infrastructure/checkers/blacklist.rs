// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BlacklistSettings;
use crate::domain::compliance::checker::{CheckerError, ComplianceChecker, LeadContext};
use crate::domain::models::check_result::ComplianceCheckResult;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

const SOURCE: &str = "Blacklist Alliance";

#[derive(Debug, Deserialize)]
struct BlacklistResponse {
    found: bool,
    details: Option<BlacklistDetails>,
}

#[derive(Debug, Deserialize)]
struct BlacklistDetails {
    reason: Option<String>,
    date_added: Option<String>,
}

/// Blacklist Alliance litigation-risk lookup, keyed by API key.
pub struct BlacklistChecker {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BlacklistChecker {
    pub fn new(settings: &BlacklistSettings, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

#[async_trait]
impl ComplianceChecker for BlacklistChecker {
    async fn check_number(
        &self,
        phone: &str,
        _context: Option<&LeadContext>,
    ) -> Result<ComplianceCheckResult, CheckerError> {
        let url = format!("{}/lookup", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("phone", phone), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(super::transport_error)?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(CheckerError::RateLimit),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CheckerError::Auth(format!(
                    "Blacklist API rejected the key (HTTP {})",
                    response.status()
                )))
            }
            status if !status.is_success() => {
                return Err(CheckerError::Network(format!(
                    "Blacklist API returned HTTP {}",
                    status
                )))
            }
            _ => {}
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CheckerError::Parse(e.to_string()))?;
        let parsed: BlacklistResponse = serde_json::from_value(raw.clone())
            .map_err(|e| CheckerError::Parse(e.to_string()))?;

        let result = if parsed.found {
            let details = parsed.details.unwrap_or(BlacklistDetails {
                reason: None,
                date_added: None,
            });
            let reason = details.reason.unwrap_or_else(|| "unspecified".to_string());
            let date_added = details
                .date_added
                .unwrap_or_else(|| "unknown".to_string());
            ComplianceCheckResult::non_compliant(
                SOURCE,
                vec![format!(
                    "Number found on Blacklist Alliance (reason: {}, added: {})",
                    reason, date_added
                )],
            )
        } else {
            ComplianceCheckResult::compliant(SOURCE)
        };

        Ok(result.with_raw_response(raw))
    }

    fn name(&self) -> &'static str {
        SOURCE
    }
}
