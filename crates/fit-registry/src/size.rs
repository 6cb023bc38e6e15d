// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Human-readable size parsing and formatting.
//!
//! Sizes are unitless positive integers. For convenience, suffixes scale
//! by powers of 1024:
//! - `"64K"` or `"64KB"` → 64 × 1024
//! - `"2M"` or `"2MB"` → 2 × 1024²
//! - `"1G"` or `"1GB"` → 1 × 1024³
//! - `"100"` → 100

use crate::InputError;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

/// Parses a size string into a positive integer.
///
/// Case-insensitive and whitespace-tolerant. Zero, negative numbers,
/// non-numeric text and overflow are all rejected.
///
/// # Examples
/// ```
/// use fit_registry::parse_size;
///
/// assert_eq!(parse_size("100").unwrap(), 100);
/// assert_eq!(parse_size("4K").unwrap(), 4096);
/// assert!(parse_size("0").is_err());
/// ```
pub fn parse_size(raw: &str) -> Result<u64, InputError> {
    let s = raw.trim();
    let invalid = || InputError::NotAPositiveInteger {
        raw: raw.trim().to_string(),
    };

    if s.is_empty() {
        return Err(invalid());
    }

    let upper = s.to_uppercase();
    let (num_str, multiplier) = if upper.ends_with("GB") {
        (&s[..s.len() - 2], GIB)
    } else if upper.ends_with('G') {
        (&s[..s.len() - 1], GIB)
    } else if upper.ends_with("MB") {
        (&s[..s.len() - 2], MIB)
    } else if upper.ends_with('M') {
        (&s[..s.len() - 1], MIB)
    } else if upper.ends_with("KB") {
        (&s[..s.len() - 2], KIB)
    } else if upper.ends_with('K') {
        (&s[..s.len() - 1], KIB)
    } else {
        (s, 1)
    };

    let value: u64 = num_str.trim().parse().map_err(|_| invalid())?;
    let size = value.checked_mul(multiplier).ok_or_else(invalid)?;

    if size == 0 {
        return Err(invalid());
    }
    Ok(size)
}

/// Formats a size with the largest suffix that divides it exactly.
pub fn format_size(size: u64) -> String {
    if size >= GIB && size % GIB == 0 {
        format!("{}G", size / GIB)
    } else if size >= MIB && size % MIB == 0 {
        format!("{}M", size / MIB)
    } else if size >= KIB && size % KIB == 0 {
        format!("{}K", size / KIB)
    } else {
        size.to_string()
    }
}
