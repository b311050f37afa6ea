// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchased or posted lead, read-only from this system's perspective.
///
/// The scrubber only ever reads leads; it never writes back. The lead
/// store is owned by the ingestion side of the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    /// Raw phone string as captured at ingestion; may be unnormalized or empty
    pub phone: String,
    /// Lead list the row belongs to
    pub list_id: String,
    pub created_at: DateTime<FixedOffset>,
}
