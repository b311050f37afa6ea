// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Output format of a scrub run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrubFormat {
    #[default]
    Json,
    Csv,
}

/// Request body for a bulk list scrub.
#[derive(Debug, Deserialize, Validate)]
pub struct ScrubRequestDto {
    #[validate(length(min = 1, message = "list_id cannot be empty"))]
    pub list_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub format: ScrubFormat,
}
