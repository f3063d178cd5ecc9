use std::path::PathBuf;

use clause_analysis::AnalysisEngine;
use clause_core::models::AnalysisOutcome;
use clause_core::ClauseConfig;
use clause_report::summarize;

use crate::ingest;

/// Ingest `files`, detect contradictions, and print the outcome or a report.
pub fn handle(
    files: &[PathBuf],
    report: bool,
    config: &ClauseConfig,
    pretty: bool,
) -> anyhow::Result<()> {
    let outcome = run(files, config);

    if report {
        let detailed = summarize(
            &outcome.contradictions,
            outcome.analysis_summary.valid_files,
        );
        super::print_json(&detailed, pretty)
    } else {
        super::print_json(&outcome, pretty)
    }
}

pub fn run(files: &[PathBuf], config: &ClauseConfig) -> AnalysisOutcome {
    let engine = AnalysisEngine::new(&config.analysis);
    engine.analyze(files.iter().map(|path| ingest::ingest_file(path)))
}
