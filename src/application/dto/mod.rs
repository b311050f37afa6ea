// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod compliance_request;
pub mod dnc_request;
pub mod scrub_request;
