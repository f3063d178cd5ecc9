//! Percentage conflicts: "at least 75%" vs "at least 80%".

use clause_core::constants::PERCENTAGE_HIGH_SEVERITY_GAP;
use clause_core::models::{ConflictDetails, ConflictType, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// A number immediately followed by `%` or `percent`. Case-sensitive.
static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:%|percent)").unwrap());

/// First percentage value in `phrase`, if one is present and parses.
pub fn first_percentage(phrase: &str) -> Option<f64> {
    let caps = PERCENT_RE.captures(phrase)?;
    caps.get(1)?.as_str().parse::<f64>().ok()
}

/// Detect two different percentage requirements.
///
/// Any difference counts. A gap of 10 points or more is high severity.
pub fn detect(a: &str, b: &str) -> Option<ConflictDetails> {
    let val1 = first_percentage(a)?;
    let val2 = first_percentage(b)?;

    // Two overflowing values parse as inf; inf - inf is NaN.
    let gap = (val1 - val2).abs();
    if gap.is_nan() || gap <= 0.0 {
        return None;
    }

    let severity = if gap >= PERCENTAGE_HIGH_SEVERITY_GAP {
        Severity::High
    } else {
        Severity::Medium
    };
    let stricter = val1.max(val2);

    Some(ConflictDetails {
        conflict_type: ConflictType::PercentageConflict,
        explanation: format!(
            "Two documents specify different percentage requirements: {val1:?}% vs {val2:?}%. \
             This creates ambiguity about which standard to follow."
        ),
        suggestion: format!(
            "Standardize the percentage requirement. Consider using the higher value \
             ({stricter:?}%) for stricter compliance or clarify which document takes precedence."
        ),
        severity,
    })
}
