mod analysis_outcome;
mod contradiction;
mod document;
mod key_phrase;

pub use analysis_outcome::{AnalysisOutcome, AnalysisSummary, FileResult, FileStatus};
pub use contradiction::{ConflictDetails, ConflictType, Contradiction, Severity};
pub use document::Document;
pub use key_phrase::{KeyPhrase, PhraseCategory};
