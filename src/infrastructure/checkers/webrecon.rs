// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::WebreconSettings;
use crate::domain::compliance::checker::{CheckerError, ComplianceChecker, LeadContext};
use crate::domain::models::check_result::ComplianceCheckResult;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

const SOURCE: &str = "Webrecon";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ScrubRequest<'a> {
    phone: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScrubResponse {
    success: bool,
    #[serde(rename = "match")]
    matched: bool,
    #[serde(rename = "matchType")]
    match_type: Option<String>,
    #[serde(rename = "dateFound")]
    date_found: Option<String>,
}

/// Cached Webrecon login state.
struct Session {
    cookie: String,
    expires_at: Instant,
}

/// Webrecon litigant-database lookup.
///
/// Webrecon has no API keys; access is a session cookie obtained from a
/// login endpoint. The session is cached across calls under a TTL and
/// rebuilt once on a 401/403, so concurrent checks share one login
/// instead of hammering the endpoint.
pub struct WebreconChecker {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    session_ttl: Duration,
    session: Mutex<Option<Session>>,
}

impl WebreconChecker {
    pub fn new(settings: &WebreconSettings, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: settings.base_url.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            session_ttl: Duration::from_secs(settings.session_ttl_secs),
            session: Mutex::new(None),
        }
    }

    /// Return a live session cookie, logging in when the cache is cold,
    /// expired, or `force` is set.
    async fn ensure_session(&self, force: bool) -> Result<String, CheckerError> {
        let mut guard = self.session.lock().await;

        if !force {
            if let Some(session) = guard.as_ref() {
                if session.expires_at > Instant::now() {
                    return Ok(session.cookie.clone());
                }
            }
        }

        debug!("Logging in to Webrecon");
        let url = format!("{}/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                username: &self.username,
                password: &self.password,
            })
            .send()
            .await
            .map_err(super::transport_error)?;

        if response.status() == StatusCode::UNAUTHORIZED
            || response.status() == StatusCode::FORBIDDEN
        {
            return Err(CheckerError::Auth(
                "Webrecon rejected the login credentials".to_string(),
            ));
        }
        if !response.status().is_success() {
            return Err(CheckerError::Network(format!(
                "Webrecon login returned HTTP {}",
                response.status()
            )));
        }

        // The session id is the first segment of the Set-Cookie header.
        let cookie = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_string)
            .ok_or_else(|| {
                CheckerError::Auth("Webrecon login did not return a session cookie".to_string())
            })?;

        *guard = Some(Session {
            cookie: cookie.clone(),
            expires_at: Instant::now() + self.session_ttl,
        });

        Ok(cookie)
    }

    async fn scrub(&self, phone: &str, cookie: &str) -> Result<reqwest::Response, CheckerError> {
        let url = format!("{}/scrub", self.base_url);
        self.client
            .post(&url)
            .header(reqwest::header::COOKIE, cookie)
            .json(&ScrubRequest { phone })
            .send()
            .await
            .map_err(super::transport_error)
    }
}

#[async_trait]
impl ComplianceChecker for WebreconChecker {
    async fn check_number(
        &self,
        phone: &str,
        _context: Option<&LeadContext>,
    ) -> Result<ComplianceCheckResult, CheckerError> {
        let cookie = self.ensure_session(false).await?;
        let mut response = self.scrub(phone, &cookie).await?;

        // One re-login covers a session the server expired early.
        if response.status() == StatusCode::UNAUTHORIZED
            || response.status() == StatusCode::FORBIDDEN
        {
            debug!("Webrecon session rejected, re-authenticating");
            let cookie = self.ensure_session(true).await?;
            response = self.scrub(phone, &cookie).await?;
        }

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(CheckerError::RateLimit),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CheckerError::Auth(
                    "Webrecon rejected the session after re-authentication".to_string(),
                ))
            }
            status if !status.is_success() => {
                return Err(CheckerError::Network(format!(
                    "Webrecon scrub returned HTTP {}",
                    status
                )))
            }
            _ => {}
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CheckerError::Parse(e.to_string()))?;
        let parsed: ScrubResponse = serde_json::from_value(raw.clone())
            .map_err(|e| CheckerError::Parse(e.to_string()))?;

        if !parsed.success {
            return Err(CheckerError::Parse(
                "Webrecon scrub reported success=false".to_string(),
            ));
        }

        let result = if parsed.matched {
            let match_type = parsed
                .match_type
                .unwrap_or_else(|| "unspecified".to_string());
            let date_found = parsed.date_found.unwrap_or_else(|| "unknown".to_string());
            ComplianceCheckResult::non_compliant(
                SOURCE,
                vec![format!("Match found: {} ({})", match_type, date_found)],
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
