//! Near-duplicate guard.
//!
//! Two phrases that are mostly the same text are restatements of one rule,
//! even when a number differs, and are never reported as conflicts.

use clause_core::constants::NEAR_DUPLICATE_RATIO;
use similar::{Algorithm, DiffOp, TextDiff};

/// Case-insensitive similarity in `[0, 1]`: `2·M / (|a| + |b|)` where `M` is
/// the length of the longest common character subsequence.
///
/// Two empty strings are identical (1.0).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    lcs_ratio(&a, &b, a_len + b_len)
}

/// Whether two phrases are restatements rather than candidates for conflict.
///
/// The common subsequence is at most the shorter phrase, so pairs whose
/// lengths alone cap the ratio at the threshold skip the diff.
pub fn is_near_duplicate(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let (a_len, b_len) = (a.chars().count(), b.chars().count());
    let total = a_len + b_len;
    if total > 0 && ratio_upper_bound(a_len, b_len) <= NEAR_DUPLICATE_RATIO {
        return false;
    }
    lcs_ratio(&a, &b, total) > NEAR_DUPLICATE_RATIO
}

/// Largest ratio two strings of these lengths can reach.
fn ratio_upper_bound(a_len: usize, b_len: usize) -> f64 {
    2.0 * a_len.min(b_len) as f64 / (a_len + b_len) as f64
}

/// LCS ratio over already-lowercased text with `total` chars combined.
fn lcs_ratio(a: &str, b: &str, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Lcs)
        .diff_chars(a, b);
    let matched: usize = diff
        .ops()
        .iter()
        .map(|op| match op {
            DiffOp::Equal { len, .. } => *len,
            _ => 0,
        })
        .sum();

    2.0 * matched as f64 / total as f64
}
