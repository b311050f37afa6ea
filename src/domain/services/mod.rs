// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain service module
///
/// The multi-source compliance aggregator, the bulk DNC scrubber and
/// the scrub report renderer
pub mod aggregator;
pub mod reporter;
pub mod scrub_service;
