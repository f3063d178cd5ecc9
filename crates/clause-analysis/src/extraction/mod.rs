//! Key-phrase extraction.
//!
//! A key phrase is a sentence of at least 16 characters that matches one of
//! the category patterns. Output preserves document order and
//! duplicates.

mod patterns;

use clause_core::constants::MIN_KEY_PHRASE_CHARS;
use clause_core::models::{KeyPhrase, PhraseCategory};

use patterns::{CATEGORY_PATTERNS, SENTENCE_SPLIT_RE};

/// Extract the key phrases of a document's text.
pub fn extract(text: &str) -> Vec<String> {
    candidate_sentences(text)
        .filter(|sentence| classify(sentence).is_some())
        .map(str::to_string)
        .collect()
}

/// Extract key phrases together with the category that admitted each one.
pub fn extract_classified(text: &str) -> Vec<KeyPhrase> {
    candidate_sentences(text)
        .filter_map(|sentence| {
            classify(sentence).map(|category| KeyPhrase {
                text: sentence.to_string(),
                category,
            })
        })
        .collect()
}

/// First category whose pattern matches `sentence`, if any.
///
/// Does not apply the minimum length rule.
pub fn classify(sentence: &str) -> Option<PhraseCategory> {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(sentence))
        .map(|(category, _)| *category)
}

/// Trimmed sentences long enough to be considered.
fn candidate_sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_KEY_PHRASE_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_runs_of_terminators() {
        let text = "Employees must give notice!!! Nothing to see here... Fees are due?";
        let sentences: Vec<&str> = candidate_sentences(text).collect();
        assert_eq!(
            sentences,
            vec!["Employees must give notice", "Nothing to see here"]
        );
    }

    #[test]
    fn length_threshold_is_sixteen_chars_after_trim() {
        // 15 chars: dropped. 16 chars: kept.
        assert!(extract("You must pay it.").is_empty());
        assert_eq!(extract("   You must pay now!   "), vec!["You must pay now"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 15 chars, 16 bytes.
        let text = "Café must close.";
        assert_eq!(text.trim_end_matches('.').chars().count(), 15);
        assert!(extract(text).is_empty());
    }

    #[test]
    fn first_matching_category_wins() {
        // Matches both obligation and numeric unit; obligation comes first.
        assert_eq!(
            classify("Reports must be filed within 30 days"),
            Some(PhraseCategory::Obligation)
        );
        assert_eq!(
            classify("Refunds are issued in 14 days"),
            Some(PhraseCategory::NumericUnit)
        );
        assert_eq!(
            classify("The lease expires in spring"),
            Some(PhraseCategory::Deadline)
        );
    }

    #[test]
    fn matches_inside_words() {
        assert_eq!(
            classify("Delegates represent their region"),
            Some(PhraseCategory::Attendance)
        );
    }

    #[test]
    fn non_policy_sentences_are_dropped() {
        let text = "The weather was pleasant this morning. Lunch is served in the hall.";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn duplicates_and_order_preserved() {
        let text = "Staff must wear badges. The garden is lovely today. Staff must wear badges.";
        assert_eq!(
            extract(text),
            vec!["Staff must wear badges", "Staff must wear badges"]
        );
    }

    #[test]
    fn classified_extraction_reports_categories() {
        let text = "Smoking is prohibited on campus. Give 30 days notice before leaving.";
        let phrases = extract_classified(text);
        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0].category, PhraseCategory::Prohibition);
        assert_eq!(phrases[1].category, PhraseCategory::NoticePeriod);
        assert_eq!(phrases[1].text, "Give 30 days notice before leaving");
    }
}
