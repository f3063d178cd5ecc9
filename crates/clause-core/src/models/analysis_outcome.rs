use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Contradiction;

/// What happened to one submitted file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    pub filename: String,
    pub status: FileStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Decoded and forwarded to the engine.
    Analyzed { characters: usize },
    /// Dropped before analysis.
    Skipped { code: String, reason: String },
}

impl FileStatus {
    pub fn is_analyzed(&self) -> bool {
        matches!(self, Self::Analyzed { .. })
    }
}

/// Counts describing one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_files: usize,
    pub valid_files: usize,
    pub contradictions_found: usize,
    pub processing_time: DateTime<Utc>,
}

/// Full result of analyzing a batch of submitted files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub files: Vec<FileResult>,
    pub contradictions: Vec<Contradiction>,
    pub analysis_summary: AnalysisSummary,
}
