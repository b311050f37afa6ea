// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain layer
///
/// Contains the core business logic of the compliance system:
/// - models: phone normalization, check results, DNC entries, scrub ledgers
/// - compliance: the checker capability contract shared by every blocklist source
/// - repositories: persistence abstractions for the DNC store and lead store
/// - services: the compliance aggregator, the bulk scrubber and the reporter
pub mod compliance;
pub mod models;
pub mod repositories;
pub mod services;
