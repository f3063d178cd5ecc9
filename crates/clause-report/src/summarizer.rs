//! Report assembly.

use chrono::{DateTime, Utc};
use clause_core::constants::REPORT_TOP_CONFLICT_TYPES;
use clause_core::errors::ClauseResult;
use clause_core::models::{ConflictType, Contradiction, Severity};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::priority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub contradictions: Vec<Contradiction>,
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analysis_id: String,
    pub documents_analyzed: usize,
    pub contradictions_found: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_contradictions: usize,
    pub high_priority_issues: usize,
    pub medium_priority_issues: usize,
    /// Up to five `(type, count)` entries, most frequent first.
    pub most_common_conflict_types: Vec<(ConflictType, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub high_priority: Vec<Recommendation>,
    pub medium_priority: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub issue: String,
    pub priority: String,
    pub action_required: String,
    pub impact: String,
    pub timeline: String,
}

impl Recommendation {
    pub fn for_contradiction(c: &Contradiction) -> Self {
        Self {
            issue: format!(
                "{} between {} and {}",
                c.conflict_type, c.doc1_name, c.doc2_name
            ),
            priority: priority::priority_label(c.severity).to_string(),
            action_required: c.suggestion.clone(),
            impact: priority::assess_impact(c.severity).to_string(),
            timeline: priority::suggest_timeline(c.severity).to_string(),
        }
    }
}

impl DetailedReport {
    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> ClauseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build a report over `contradictions` produced from `documents_analyzed` documents.
pub fn summarize(contradictions: &[Contradiction], documents_analyzed: usize) -> DetailedReport {
    let high: Vec<&Contradiction> = contradictions
        .iter()
        .filter(|c| c.severity == Severity::High)
        .collect();
    let medium: Vec<&Contradiction> = contradictions
        .iter()
        .filter(|c| c.severity == Severity::Medium)
        .collect();

    let analysis_id = Uuid::new_v4().to_string();
    debug!(
        %analysis_id,
        high = high.len(),
        medium = medium.len(),
        "building report"
    );

    DetailedReport {
        metadata: ReportMetadata {
            generated_at: Utc::now(),
            analysis_id,
            documents_analyzed,
            contradictions_found: contradictions.len(),
        },
        summary: ReportSummary {
            total_contradictions: contradictions.len(),
            high_priority_issues: high.len(),
            medium_priority_issues: medium.len(),
            most_common_conflict_types: common_conflict_types(contradictions),
        },
        contradictions: contradictions.to_vec(),
        recommendations: Recommendations {
            high_priority: high
                .into_iter()
                .map(Recommendation::for_contradiction)
                .collect(),
            medium_priority: medium
                .into_iter()
                .map(Recommendation::for_contradiction)
                .collect(),
        },
    }
}

/// Count contradictions per type, most frequent first. Ties keep first-seen order.
fn common_conflict_types(contradictions: &[Contradiction]) -> Vec<(ConflictType, usize)> {
    let mut counts: Vec<(ConflictType, usize)> = Vec::new();
    for c in contradictions {
        match counts.iter_mut().find(|(t, _)| *t == c.conflict_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((c.conflict_type, 1)),
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(REPORT_TOP_CONFLICT_TYPES);
    counts
}
