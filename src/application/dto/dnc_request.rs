// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dnc_entry::{DncStatus, NewDncEntry};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for adding one number to the internal DNC list.
///
/// Serialize is needed for validation error reporting on the bulk
/// request's entry list.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AddDncRequestDto {
    #[validate(length(min = 1, message = "phone_number cannot be empty"))]
    pub phone_number: String,
    pub reason: Option<String>,
    pub source: Option<String>,
    pub added_by: Option<String>,
}

impl From<AddDncRequestDto> for NewDncEntry {
    fn from(dto: AddDncRequestDto) -> Self {
        Self {
            phone_number: dto.phone_number,
            reason: dto.reason,
            source: dto.source,
            added_by: dto.added_by,
        }
    }
}

/// Request body for a bulk opt-out import.
#[derive(Debug, Deserialize, Validate)]
pub struct BulkAddDncRequestDto {
    #[validate(length(min = 1, message = "entries cannot be empty"))]
    pub entries: Vec<AddDncRequestDto>,
}

/// Request body for changing a DNC entry's status.
#[derive(Debug, Deserialize, Validate)]
pub struct SetDncStatusRequestDto {
    #[validate(length(min = 1, message = "phone_number cannot be empty"))]
    pub phone_number: String,
    pub status: DncStatus,
}
