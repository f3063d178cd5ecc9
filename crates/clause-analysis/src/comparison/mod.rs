//! Pairwise phrase comparison.
//!
//! Strategies run in order and the first hit wins:
//! 1. Percentage conflict
//! 2. Time-period conflict
//!
//! The near-duplicate guard in [`similarity`] is applied by the caller
//! before [`compare`]; comparing two restatements here still classifies them.

pub mod percentage;
pub mod similarity;
pub mod time_period;

use clause_core::models::ConflictDetails;

/// Compare two phrases from different documents.
///
/// Returns `None` when no conflict is found. Never fails: numbers that do
/// not parse simply produce no conflict.
pub fn compare(a: &str, b: &str) -> Option<ConflictDetails> {
    if let Some(c) = percentage::detect(a, b) {
        return Some(c);
    }

    if let Some(c) = time_period::detect(a, b) {
        return Some(c);
    }

    None
}
