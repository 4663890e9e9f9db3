use core::{Document, TfidfIndex};

fn doc(id: &str, content: &str) -> Document {
    Document {
        id: id.to_string(),
        title: id.to_string(),
        content: content.to_string(),
    }
}

fn sample_corpus() -> Vec<Document> {
    vec![
        doc(
            "requests",
            "Requests is an HTTP library for Python.\nTo install, run `pip install requests`.",
        ),
        doc(
            "flask",
            "Flask is a lightweight web framework.\nInstall Flask to build HTTP services quickly.",
        ),
        doc(
            "gardening",
            "Prune tomato vines weekly.\nWater the soil gently in the morning.",
        ),
    ]
}

#[test]
fn results_are_bounded_sorted_and_positive() {
    let index = TfidfIndex::build(sample_corpus()).unwrap();
    let results = index.query("how do I install an HTTP library?", 2);
    assert!(!results.is_empty());
    assert!(results.len() <= 2);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for ctx in &results {
        assert!(ctx.score > 0.0 && ctx.score <= 1.0);
    }
}

#[test]
fn empty_and_whitespace_queries_return_nothing() {
    let index = TfidfIndex::build(sample_corpus()).unwrap();
    assert!(index.query("", 3).is_empty());
    assert!(index.query("   \t\n", 3).is_empty());
}

#[test]
fn zero_similarity_documents_are_excluded() {
    let index = TfidfIndex::build(sample_corpus()).unwrap();
    let results = index.query("kernel scheduler preemption", 3);
    assert!(results.is_empty());
}

#[test]
fn rebuilding_yields_bit_identical_scores() {
    let question = "install the requests HTTP library";
    let first = TfidfIndex::build(sample_corpus()).unwrap().query(question, 3);
    let second = TfidfIndex::build(sample_corpus()).unwrap().query(question, 3);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.document.id, b.document.id);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }
}

#[test]
fn ties_keep_corpus_load_order() {
    let corpus = vec![
        doc("alpha", "Sparrows migrate in autumn."),
        doc("beta", "Sparrows migrate in autumn."),
    ];
    let index = TfidfIndex::build(corpus).unwrap();
    let results = index.query("when do sparrows migrate?", 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].score.to_bits(), results[1].score.to_bits());
    assert_eq!(results[0].document.id, "alpha");
    assert_eq!(results[1].document.id, "beta");
}

#[test]
fn single_document_corpus_is_retrievable() {
    let index = TfidfIndex::build(vec![doc(
        "requests",
        "To install, run `pip install requests`.",
    )])
    .unwrap();
    let results = index.query("how do I install requests?", 1);
    assert_eq!(results.len(), 1);
    assert!(results[0].score > 0.0 && results[0].score <= 1.0);
}

#[test]
fn building_over_zero_documents_fails() {
    let err = TfidfIndex::build(Vec::new()).unwrap_err();
    assert!(err.to_string().contains("no documents"));
}
