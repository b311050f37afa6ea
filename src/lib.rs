// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Application module
///
/// Request/response DTOs crossing the HTTP boundary
pub mod application;

/// Configuration module
///
/// Handles application settings and environment variables
pub mod config;

/// Domain module
///
/// Core business entities, the compliance checker contract,
/// repository interfaces and the aggregation/scrubbing services
pub mod domain;

/// Infrastructure module
///
/// External integrations: database, vendor blocklist checkers, metrics
pub mod infrastructure;

/// Presentation module
///
/// HTTP request handling: routes, handlers and error mapping
pub mod presentation;

/// Utility module
///
/// Shared helpers such as telemetry initialization
pub mod utils;
