use serde::{Deserialize, Serialize};

use super::defaults;

/// Contradiction analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum contradictions returned per aggregation, in discovery order.
    pub max_contradictions: usize,
    /// Optional cap on key phrases considered per document. Bounds the
    /// pairwise comparison cost on very large inputs. Unset = no cap.
    pub max_phrases_per_document: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_contradictions: defaults::DEFAULT_MAX_CONTRADICTIONS,
            max_phrases_per_document: defaults::DEFAULT_MAX_PHRASES_PER_DOCUMENT,
        }
    }
}
