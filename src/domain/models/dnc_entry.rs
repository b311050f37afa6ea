// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the internal do-not-call blocklist.
///
/// The blocklist is an append-only audit trail: entries persist
/// indefinitely and only `status` may change after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DncEntry {
    /// Canonical 10-digit phone key
    pub phone_number: String,
    /// Why the number was blocked
    pub reason: String,
    /// Where the block originated (dialer, csv upload, manual, ...)
    pub source: String,
    /// Operator or system that created the entry
    pub added_by: String,
    pub added_at: DateTime<FixedOffset>,
    pub status: DncStatus,
}

/// Entry lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DncStatus {
    /// Entry is enforced against checks and scrubs
    #[default]
    Active,
    /// Entry is retained for audit but no longer enforced
    Inactive,
}

impl fmt::Display for DncStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DncStatus::Active => write!(f, "active"),
            DncStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for DncStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DncStatus::Active),
            "inactive" => Ok(DncStatus::Inactive),
            _ => Err(()),
        }
    }
}

/// Input for creating or refreshing a blocklist entry.
///
/// The phone number is normalized before the upsert; omitted fields
/// fall back to the defaults the store has always used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDncEntry {
    pub phone_number: String,
    pub reason: Option<String>,
    pub source: Option<String>,
    pub added_by: Option<String>,
}

impl NewDncEntry {
    pub fn reason_or_default(&self) -> String {
        self.reason
            .clone()
            .unwrap_or_else(|| "User opted out".to_string())
    }

    pub fn source_or_default(&self) -> String {
        self.source.clone().unwrap_or_else(|| "manual".to_string())
    }

    pub fn added_by_or_default(&self) -> String {
        self.added_by
            .clone()
            .unwrap_or_else(|| "system".to_string())
    }
}
