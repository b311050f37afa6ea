// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Compliance contract module
///
/// The capability contract every blocklist source implements
pub mod checker;
