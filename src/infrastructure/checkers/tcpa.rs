// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::TcpaSettings;
use crate::domain::compliance::checker::{CheckerError, ComplianceChecker, LeadContext};
use crate::domain::models::check_result::ComplianceCheckResult;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

const SOURCE: &str = "TCPA Litigator List";
const STATE_SOURCE: &str = "State DNC";

fn is_state_status(status: &str) -> bool {
    status.to_lowercase().contains("state")
}

#[derive(Debug, Deserialize)]
struct TcpaResponse {
    results: Option<TcpaResults>,
}

#[derive(Debug, Deserialize)]
struct TcpaResults {
    clean: Option<i64>,
    #[serde(default)]
    status_array: Vec<String>,
}

/// TCPA Litigator List scrub endpoint.
///
/// The number is screened against the litigator, federal DNC and
/// troll categories in one call; when the lead's state is known the
/// state-level DNC category is added to the same request. `clean == 1`
/// is the only passing answer, anything else carries the flagged
/// categories in `status_array`. Hits carried only by state-level
/// entries are attributed to the `State DNC` source.
pub struct TcpaChecker {
    client: reqwest::Client,
    base_url: String,
    auth_header: String,
}

impl TcpaChecker {
    pub fn new(settings: &TcpaSettings, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let credentials = format!("{}:{}", settings.username, settings.password);
        let auth_header = format!("Basic {}", STANDARD.encode(credentials));

        Self {
            client,
            base_url: settings.base_url.clone(),
            auth_header,
        }
    }
}

#[async_trait]
impl ComplianceChecker for TcpaChecker {
    async fn check_number(
        &self,
        phone: &str,
        context: Option<&LeadContext>,
    ) -> Result<ComplianceCheckResult, CheckerError> {
        let state = context.and_then(|ctx| ctx.state.as_deref());

        let mut form: Vec<(&str, String)> = vec![
            ("type[]", "tcpa".to_string()),
            ("type[]", "dnc_complainers".to_string()),
            ("phone_number", phone.to_string()),
        ];
        if let Some(state) = state {
            form.push(("type[]", "state_dnc".to_string()));
            form.push(("state", state.to_string()));
        }

        let url = format!("{}/scrub/phone", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.auth_header)
            .form(&form)
            .send()
            .await
            .map_err(super::transport_error)?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(CheckerError::RateLimit),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CheckerError::Auth(format!(
                    "TCPA API rejected credentials (HTTP {})",
                    response.status()
                )))
            }
            status if !status.is_success() => {
                return Err(CheckerError::Network(format!(
                    "TCPA API returned HTTP {}",
                    status
                )))
            }
            _ => {}
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CheckerError::Parse(e.to_string()))?;
        let parsed: TcpaResponse = serde_json::from_value(raw.clone())
            .map_err(|e| CheckerError::Parse(e.to_string()))?;

        let results = parsed
            .results
            .ok_or_else(|| CheckerError::Parse("TCPA response missing 'results'".to_string()))?;

        let result = if results.clean == Some(1) {
            ComplianceCheckResult::compliant(SOURCE)
        } else {
            let statuses = &results.status_array;
            let reasons = if statuses.is_empty() {
                vec!["Number flagged by TCPA Litigator List".to_string()]
            } else {
                statuses
                    .iter()
                    .map(|status| {
                        if is_state_status(status) {
                            format!("Flagged by State DNC: {}", status)
                        } else {
                            format!("Flagged by TCPA Litigator List: {}", status)
                        }
                    })
                    .collect()
            };
            // A hit carried only by state-level entries is attributed to
            // the state list, not the federal one.
            let source = if !statuses.is_empty() && statuses.iter().all(|s| is_state_status(s)) {
                STATE_SOURCE
            } else {
                SOURCE
            };
            ComplianceCheckResult::non_compliant(source, reasons)
        };

        Ok(result.with_raw_response(raw))
    }

    fn name(&self) -> &'static str {
        SOURCE
    }
}
