// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Repository interface module
///
/// Persistence abstractions for the DNC blocklist store and the
/// read-only lead store
pub mod dnc_repository;
pub mod lead_repository;

use sea_orm::DbErr;
use thiserror::Error;

/// Repository error type shared by every store interface.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// Record not found
    #[error("Record not found")]
    NotFound,
}
