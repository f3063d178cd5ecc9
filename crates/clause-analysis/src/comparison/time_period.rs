//! Time-period conflicts: "10 days notice" vs "20 days notice".

use clause_core::constants::TIME_PERIOD_HIGH_SEVERITY_GAP;
use clause_core::models::{ConflictDetails, ConflictType, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// Both phrases must mention one of these before durations are compared.
const TIME_KEYWORDS: [&str; 6] = ["days", "weeks", "months", "notice", "deadline", "advance"];

/// An integer followed by a day/week/month unit. Applied to lowercased text.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(days?|weeks?|months?)").unwrap());

/// A duration as written: value plus the unit exactly as matched
/// ("day" and "days" are different units).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duration {
    pub value: u64,
    pub unit: String,
}

fn mentions_time(lowered: &str) -> bool {
    TIME_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// First duration in already-lowercased text, if one is present and parses.
pub fn first_duration(lowered: &str) -> Option<Duration> {
    let caps = DURATION_RE.captures(lowered)?;
    let value = caps.get(1)?.as_str().parse::<u64>().ok()?;
    let unit = caps.get(2)?.as_str().to_string();
    Some(Duration { value, unit })
}

/// Detect two different durations expressed in the same unit.
///
/// A gap of 7 or more (in that unit) is high severity.
pub fn detect(a: &str, b: &str) -> Option<ConflictDetails> {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if !mentions_time(&a) || !mentions_time(&b) {
        return None;
    }

    let first = first_duration(&a)?;
    let second = first_duration(&b)?;
    if first.unit != second.unit || first.value == second.value {
        return None;
    }

    let severity = if first.value.abs_diff(second.value) >= TIME_PERIOD_HIGH_SEVERITY_GAP {
        Severity::High
    } else {
        Severity::Medium
    };
    let longer = first.value.max(second.value);

    Some(ConflictDetails {
        conflict_type: ConflictType::TimePeriodConflict,
        explanation: format!(
            "Conflicting time requirements found: {} {} vs {} {}. \
             This could lead to confusion about actual deadlines.",
            first.value, first.unit, second.value, second.unit
        ),
        suggestion: format!(
            "Establish a single, clear time requirement. Recommend using {longer} {} \
             to ensure adequate time for compliance.",
            first.unit
        ),
        severity,
    })
}
