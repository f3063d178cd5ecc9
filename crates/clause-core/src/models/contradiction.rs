use std::fmt;

use serde::{Deserialize, Serialize};

/// A detected conflict between key phrases of two different documents.
///
/// `doc1_*` always refers to the document that came first in the analyzed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    pub id: String,
    pub doc1_name: String,
    pub doc2_name: String,
    pub doc1_text: String,
    pub doc2_text: String,
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    pub explanation: String,
    pub suggestion: String,
    pub severity: Severity,
}

impl Contradiction {
    /// True when everything except the generated id matches.
    pub fn same_content(&self, other: &Contradiction) -> bool {
        self.doc1_name == other.doc1_name
            && self.doc2_name == other.doc2_name
            && self.doc1_text == other.doc1_text
            && self.doc2_text == other.doc2_text
            && self.conflict_type == other.conflict_type
            && self.explanation == other.explanation
            && self.suggestion == other.suggestion
            && self.severity == other.severity
    }
}

/// Classification produced by comparing two phrases, before the
/// aggregator attaches ids and document names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictDetails {
    pub conflict_type: ConflictType,
    pub explanation: String,
    pub suggestion: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConflictType {
    /// Two different percentage requirements.
    #[serde(rename = "Percentage Conflict")]
    PercentageConflict,
    /// Two different durations in the same unit.
    #[serde(rename = "Time Period Conflict")]
    TimePeriodConflict,
}

impl ConflictType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PercentageConflict => "Percentage Conflict",
            Self::TimePeriodConflict => "Time Period Conflict",
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse urgency derived from the size of the numeric disagreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
