// Copyright (c) 2025 Scrubrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Canonicalize a raw phone representation to the 10-digit US comparison key.
///
/// Strips every non-digit character, drops a leading `1` or `0` from an
/// 11-digit string, and keeps the last 10 digits of anything longer.
/// Shorter digit strings are returned unchanged; callers treat anything
/// that is not exactly 10 digits as invalid.
///
/// The function is pure and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 11 && (digits.starts_with('1') || digits.starts_with('0')) {
        return digits[1..].to_string();
    }

    if digits.len() >= 10 {
        return digits[digits.len() - 10..].to_string();
    }

    digits
}

/// Whether a string is already the canonical 10-digit key.
pub fn is_canonical(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}
