//! Fixed severity → impact / timeline policy.

use clause_core::models::Severity;

/// How much damage an unresolved contradiction of this severity can do.
pub fn assess_impact(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "Critical - May cause legal compliance issues or operational confusion",
        Severity::Medium => "Moderate - Could lead to inconsistent implementation",
    }
}

/// How soon a contradiction of this severity should be resolved.
pub fn suggest_timeline(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "Immediate action required (within 24-48 hours)",
        Severity::Medium => "Address within 1 week",
    }
}

/// Lowercase priority label used in reports.
pub fn priority_label(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "high",
        Severity::Medium => "medium",
    }
}
