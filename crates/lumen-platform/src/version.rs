//! Ordinal version comparison.
//!
//! Versions are reduced to an integer key by dropping every `.` and
//! parsing what remains as base-10. "10.14" keys to 1014 and "10.9" to
//! 109, so thresholds compare by digit concatenation, not by semantic
//! version rules. That quirk is the contract this module preserves: the
//! consumers only ever ask coarse questions like "Windows 10 or later"
//! where it holds.

/// Reduce a raw version string to its comparison key.
///
/// Malformed or empty input keys to `0`, never an error, so unknown
/// versions always compare as "not higher".
pub fn version_key(raw: &str) -> i64 {
    raw.replace('.', "").parse().unwrap_or(0)
}

/// `detected >= threshold` under the digit-concatenation key.
pub fn at_least(detected: &str, threshold: &str) -> bool {
    version_key(detected) >= version_key(threshold)
}
