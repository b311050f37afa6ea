// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod dnc_roundtrip_test;
pub mod helpers;
pub mod scrub_test;
