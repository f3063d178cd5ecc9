//! Policy-relevant sentence patterns, in match-priority order.
//!
//! Patterns are plain substring searches: "present" also matches inside
//! "represent", and "by" inside "nearby".

use clause_core::models::PhraseCategory;
use regex::Regex;
use std::sync::LazyLock;

/// Sentence terminators. Runs like "?!" or "..." split once.
pub(crate) static SENTENCE_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// One compiled regex per category, checked in order.
pub(crate) static CATEGORY_PATTERNS: LazyLock<Vec<(PhraseCategory, Regex)>> =
    LazyLock::new(|| {
        [
            (
                PhraseCategory::Obligation,
                r"(?i)(?:must|should|shall|required?|mandatory|compulsory|obligatory|necessary)",
            ),
            (
                PhraseCategory::Prohibition,
                r"(?i)(?:not allowed|prohibited|forbidden|banned|cannot|must not|shall not)",
            ),
            (
                PhraseCategory::Deadline,
                r"(?i)(?:deadline|due date|submit (?:by|before)|expires?)",
            ),
            (
                PhraseCategory::Bound,
                r"(?i)(?:minimum|maximum|at least|no more than|up to)",
            ),
            (PhraseCategory::Attendance, r"(?i)(?:attendance|present|absent)"),
            (
                PhraseCategory::NoticePeriod,
                r"(?i)(?:notice period|advance notice|days? notice)",
            ),
            (
                PhraseCategory::NumericUnit,
                r"(?i)\d+\s*(?:days?|weeks?|months?|years?|hours?|minutes?|%|percent)",
            ),
            (
                PhraseCategory::RelativeDate,
                r"(?i)(?:before|after|by|until|no later than)\s+(?:\d+|\w+)",
            ),
        ]
        .into_iter()
        .map(|(category, pattern)| (category, Regex::new(pattern).unwrap()))
        .collect()
    });
