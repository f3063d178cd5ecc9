use criterion::{criterion_group, criterion_main, Criterion};

use clause_analysis::{aggregate, extraction};
use clause_core::models::Document;

const CLAUSES: [&str; 6] = [
    "Employees must complete {n}% of assigned training modules",
    "Resignations require {n} days notice",
    "Expense claims are due within {n} weeks of purchase",
    "Contractors shall give {n} days written notice before termination",
    "Visitors must sign in at reception desk {n}",
    "The cafeteria menu changes every season",
];

/// Build a document of `sentences` clauses with numbers varying by `seed`.
fn make_document(name: &str, sentences: usize, seed: usize) -> Document {
    let text: Vec<String> = (0..sentences)
        .map(|i| CLAUSES[i % CLAUSES.len()].replace("{n}", &((i * 7 + seed) % 60 + 1).to_string()))
        .collect();
    Document::new(name, text.join(". "))
}

fn bench_extract(c: &mut Criterion) {
    let doc = make_document("large.txt", 500, 3);
    c.bench_function("extract_500_sentences", |b| {
        b.iter(|| extraction::extract(&doc.text))
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let docs: Vec<Document> = (0..4)
        .map(|i| make_document(&format!("doc{i}.txt"), 40, i * 11))
        .collect();
    c.bench_function("aggregate_4_docs_40_sentences", |b| b.iter(|| aggregate(&docs)));
}

criterion_group!(benches, bench_extract, bench_aggregate);
criterion_main!(benches);
