//! All-pairs contradiction aggregation across documents.

use std::collections::HashSet;

use clause_core::config::AnalysisConfig;
use clause_core::constants::DEFAULT_MAX_CONTRADICTIONS;
use clause_core::models::{Contradiction, Document};
use tracing::debug;
use uuid::Uuid;

use crate::comparison::{self, similarity};
use crate::extraction;

/// Type alias for the contradiction id source.
pub type IdFn<'a> = dyn FnMut() -> String + 'a;

/// Drives extraction and pairwise comparison over a document set.
///
/// Every pair of documents `(i, j)` with `i < j` is compared phrase by
/// phrase. Results are deduplicated on the lowercased phrase pair and capped
/// in discovery order.
#[derive(Debug, Clone)]
pub struct ContradictionAggregator {
    max_contradictions: usize,
    max_phrases_per_document: Option<usize>,
}

impl ContradictionAggregator {
    pub fn new() -> Self {
        Self {
            max_contradictions: DEFAULT_MAX_CONTRADICTIONS,
            max_phrases_per_document: None,
        }
    }

    pub fn with_config(config: &AnalysisConfig) -> Self {
        Self {
            max_contradictions: config.max_contradictions,
            max_phrases_per_document: config.max_phrases_per_document,
        }
    }

    pub fn max_contradictions(&self) -> usize {
        self.max_contradictions
    }

    /// Detect contradictions, assigning each a random UUID v4 id.
    pub fn aggregate(&self, documents: &[Document]) -> Vec<Contradiction> {
        self.aggregate_with_ids(documents, &mut || Uuid::new_v4().to_string())
    }

    /// Detect contradictions, taking ids from `next_id`.
    ///
    /// `next_id` is called once per emitted contradiction, in output order.
    pub fn aggregate_with_ids(
        &self,
        documents: &[Document],
        next_id: &mut IdFn<'_>,
    ) -> Vec<Contradiction> {
        let doc_phrases: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| {
                let mut phrases = extraction::extract(&doc.text);
                if let Some(cap) = self.max_phrases_per_document {
                    phrases.truncate(cap);
                }
                debug!(
                    filename = %doc.filename,
                    phrases = phrases.len(),
                    "extracted key phrases"
                );
                phrases
            })
            .collect();

        let mut contradictions = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut compared = 0usize;
        let mut near_duplicates = 0usize;

        'pairs: for i in 0..documents.len() {
            for j in (i + 1)..documents.len() {
                for phrase_a in &doc_phrases[i] {
                    for phrase_b in &doc_phrases[j] {
                        if contradictions.len() >= self.max_contradictions {
                            break 'pairs;
                        }

                        if similarity::is_near_duplicate(phrase_a, phrase_b) {
                            near_duplicates += 1;
                            continue;
                        }

                        compared += 1;
                        let Some(details) = comparison::compare(phrase_a, phrase_b) else {
                            continue;
                        };

                        if !seen.insert(conflict_key(phrase_a, phrase_b)) {
                            continue;
                        }

                        contradictions.push(Contradiction {
                            id: next_id(),
                            doc1_name: documents[i].filename.clone(),
                            doc2_name: documents[j].filename.clone(),
                            doc1_text: phrase_a.clone(),
                            doc2_text: phrase_b.clone(),
                            conflict_type: details.conflict_type,
                            explanation: details.explanation,
                            suggestion: details.suggestion,
                            severity: details.severity,
                        });
                    }
                }
            }
        }

        debug!(
            documents = documents.len(),
            compared,
            near_duplicates,
            contradictions = contradictions.len(),
            "aggregation finished"
        );

        contradictions
    }
}

impl Default for ContradictionAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect contradictions with the default cap of 15.
pub fn aggregate(documents: &[Document]) -> Vec<Contradiction> {
    ContradictionAggregator::default().aggregate(documents)
}

/// Order-independent dedup key: both phrases lowercased, sorted.
fn conflict_key(a: &str, b: &str) -> (String, String) {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
