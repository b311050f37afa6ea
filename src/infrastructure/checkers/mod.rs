// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Blocklist source clients
///
/// One module per source: the writable internal list plus the four
/// vendor APIs
pub mod blacklist;
pub mod internal_dnc;
pub mod synergy;
pub mod tcpa;
pub mod webrecon;

use crate::config::settings::ComplianceSettings;
use crate::domain::compliance::checker::{CheckerError, ComplianceChecker};
use anyhow::{bail, Result};
use std::sync::Arc;
use std::time::Duration;

/// Map a reqwest transport failure onto the checker taxonomy.
pub(crate) fn transport_error(e: reqwest::Error) -> CheckerError {
    if e.is_timeout() {
        CheckerError::Timeout
    } else {
        CheckerError::Network(e.to_string())
    }
}

/// Build the full checker chain in its fixed report order.
///
/// Fails fast on missing vendor credentials rather than starting a
/// service whose checks would all fold fail-closed at runtime.
pub fn build_default_checkers(
    settings: &ComplianceSettings,
    internal_dnc: Arc<internal_dnc::InternalDncChecker>,
) -> Result<Vec<Arc<dyn ComplianceChecker>>> {
    if settings.synergy.api_url.is_empty() {
        bail!("Synergy API URL is not configured");
    }
    if settings.tcpa.username.is_empty() || settings.tcpa.password.is_empty() {
        bail!("TCPA credentials are not configured");
    }
    if settings.blacklist.api_key.is_empty() {
        bail!("Blacklist API key is not configured");
    }
    if settings.webrecon.username.is_empty() || settings.webrecon.password.is_empty() {
        bail!("Webrecon credentials are not configured");
    }

    let timeout = Duration::from_millis(settings.checker_timeout_ms);

    Ok(vec![
        internal_dnc,
        Arc::new(synergy::SynergyDncChecker::new(&settings.synergy, timeout)),
        Arc::new(tcpa::TcpaChecker::new(&settings.tcpa, timeout)),
        Arc::new(blacklist::BlacklistChecker::new(
            &settings.blacklist,
            timeout,
        )),
        Arc::new(webrecon::WebreconChecker::new(&settings.webrecon, timeout)),
    ])
}
