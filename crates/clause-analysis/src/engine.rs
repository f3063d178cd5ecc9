//! AnalysisEngine: takes per-file ingestion outcomes, drops failures,
//! runs aggregation, and summarizes the run.

use chrono::Utc;
use clause_core::config::AnalysisConfig;
use clause_core::errors::{ClauseErrorCode, IngestError};
use clause_core::models::{AnalysisOutcome, AnalysisSummary, Document, FileResult, FileStatus};
use tracing::{info, warn};

use crate::aggregator::ContradictionAggregator;

/// Batch analysis over ingested files.
pub struct AnalysisEngine {
    aggregator: ContradictionAggregator,
}

impl AnalysisEngine {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            aggregator: ContradictionAggregator::with_config(config),
        }
    }

    pub fn aggregator(&self) -> &ContradictionAggregator {
        &self.aggregator
    }

    /// Analyze a batch of ingestion outcomes, one per submitted file.
    ///
    /// Failed files are reported as skipped and never reach the aggregator.
    /// Contradiction detection only runs with two or more valid documents.
    pub fn analyze<I>(&self, loads: I) -> AnalysisOutcome
    where
        I: IntoIterator<Item = Result<Document, IngestError>>,
    {
        let mut files = Vec::new();
        let mut valid_docs = Vec::new();

        for load in loads {
            match load {
                Ok(doc) => {
                    files.push(FileResult {
                        filename: doc.filename.clone(),
                        status: FileStatus::Analyzed {
                            characters: doc.text.chars().count(),
                        },
                    });
                    valid_docs.push(doc);
                }
                Err(e) => {
                    warn!(file = e.source_name(), error = %e, "skipping file");
                    files.push(FileResult {
                        filename: e.source_name().to_string(),
                        status: FileStatus::Skipped {
                            code: e.error_code().to_string(),
                            reason: e.to_string(),
                        },
                    });
                }
            }
        }

        let contradictions = if valid_docs.len() > 1 {
            self.aggregator.aggregate(&valid_docs)
        } else {
            Vec::new()
        };

        let analysis_summary = AnalysisSummary {
            total_files: files.len(),
            valid_files: valid_docs.len(),
            contradictions_found: contradictions.len(),
            processing_time: Utc::now(),
        };

        info!(
            total_files = analysis_summary.total_files,
            valid_files = analysis_summary.valid_files,
            contradictions = analysis_summary.contradictions_found,
            "analysis complete"
        );

        AnalysisOutcome {
            files,
            contradictions,
            analysis_summary,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}
