// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// Request body for a single-number compliance check.
#[derive(Debug, Deserialize, Validate)]
pub struct ComplianceCheckRequestDto {
    #[validate(length(min = 1, message = "phone cannot be empty"))]
    pub phone: String,
    /// Two-letter US state code, used for state-level DNC rules
    #[validate(length(equal = 2, message = "state must be a 2-letter code"))]
    pub state: Option<String>,
}
