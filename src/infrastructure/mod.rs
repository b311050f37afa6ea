// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Infrastructure module
///
/// Vendor blocklist clients, database access and metrics
pub mod checkers;
pub mod database;
pub mod metrics;
pub mod repositories;
