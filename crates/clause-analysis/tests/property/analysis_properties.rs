use clause_analysis::comparison::similarity;
use clause_analysis::{aggregate, extraction};
use clause_core::models::Document;
use proptest::prelude::*;

const SENTENCES: [&str; 12] = [
    "Attendance must be at least 75% for every course",
    "Students failing to reach 80% attendance lose exam eligibility",
    "Tenants must provide a notice period of 10 days before moving out",
    "Landlords expect 20 days notice in writing from departing occupants",
    "Expense claims are due within 2 weeks of purchase",
    "Claims for expenses must be filed within 4 weeks",
    "The library opens at nine",
    "Late submissions lose 10% of the available marks",
    "Contractors shall give 45 days written notice before termination",
    "Visitors must sign in at reception",
    "Lunch is served in the hall",
    "Ok",
];

fn document_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(SENTENCES.to_vec()), 0..6)
        .prop_map(|sentences| sentences.join(". "))
}

fn document_set(max_docs: usize) -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(document_text(), 0..=max_docs).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document::new(format!("doc{i}.txt"), text))
            .collect()
    })
}

proptest! {
    #[test]
    fn extracted_phrases_are_trimmed_long_sentences_of_the_text(text in ".{0,300}") {
        for phrase in extraction::extract(&text) {
            prop_assert!(phrase.chars().count() >= 16);
            prop_assert_eq!(phrase.trim(), phrase.as_str());
            prop_assert!(text.contains(&phrase));
            prop_assert!(extraction::classify(&phrase).is_some());
        }
    }

    #[test]
    fn similarity_is_bounded_and_symmetric(a in ".{0,60}", b in ".{0,60}") {
        let ab = similarity::ratio(&a, &b);
        let ba = similarity::ratio(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn single_document_never_yields_contradictions(text in document_text()) {
        let docs = vec![Document::new("only.txt", text)];
        prop_assert!(aggregate(&docs).is_empty());
    }

    #[test]
    fn output_is_capped_and_ordered_by_document(docs in document_set(5)) {
        let found = aggregate(&docs);
        prop_assert!(found.len() <= 15);
        let pos = |name: &str| docs.iter().position(|d| d.filename == name).unwrap();
        for c in &found {
            prop_assert!(pos(&c.doc1_name) < pos(&c.doc2_name));
            prop_assert!(!similarity::is_near_duplicate(&c.doc1_text, &c.doc2_text));
        }
    }

    #[test]
    fn aggregation_is_idempotent(docs in document_set(4)) {
        let first = aggregate(&docs);
        let second = aggregate(&docs);
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert!(a.same_content(b));
        }
    }
}
