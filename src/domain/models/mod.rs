// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain model module
///
/// Core entities and value types shared across the compliance engine
/// and the bulk scrubbing pipeline
pub mod check_result;
pub mod dnc_entry;
pub mod lead;
pub mod phone;
pub mod scrub;
