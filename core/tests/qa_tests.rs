use core::{QaBot, NOT_FOUND_RESPONSE};
use std::fs;
use tempfile::tempdir;

#[test]
fn answers_install_questions_with_pip_install_line() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("python_requests.md"),
        "# Python Requests\n\nRequests is an HTTP library for Python.\nTo install, run `pip install requests`.\n",
    )
    .unwrap();

    let bot = QaBot::new(dir.path(), 3).unwrap();
    let answer = bot.answer("How do I install the Python requests library?");
    assert!(answer.response.contains("pip install requests"));
    assert!(answer.response.starts_with("According to Python Requests,"));
    assert!(!answer.contexts.is_empty());
}

#[test]
fn disjoint_vocabulary_yields_not_found() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("gardening.md"),
        "Prune tomato vines weekly.\nWater the soil gently in the morning.\n",
    )
    .unwrap();

    let bot = QaBot::new(dir.path(), 3).unwrap();
    let answer = bot.answer("database connection pooling");
    assert_eq!(answer.response, NOT_FOUND_RESPONSE);
    assert!(answer.contexts.is_empty());
}

#[test]
fn contexts_are_ranked_descending() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("requests.md"),
        "Requests is an HTTP library.\nTo install, run `pip install requests`.\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("flask.md"),
        "Flask serves HTTP requests with a tiny core.\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("gardening.md"),
        "Prune tomato vines weekly.\n",
    )
    .unwrap();

    let bot = QaBot::new(dir.path(), 3).unwrap();
    let contexts = bot.retrieve("install the requests HTTP library");
    assert!(contexts.len() >= 2);
    for pair in contexts.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for ctx in &contexts {
        assert!(ctx.score > 0.0 && ctx.score <= 1.0);
    }
}

#[test]
fn equal_documents_rank_by_filename_order() {
    let dir = tempdir().unwrap();
    // Written out of order on purpose; loading sorts by filename.
    fs::write(dir.path().join("b_doc.md"), "Sparrows migrate in autumn.\n").unwrap();
    fs::write(dir.path().join("a_doc.md"), "Sparrows migrate in autumn.\n").unwrap();

    let bot = QaBot::new(dir.path(), 2).unwrap();
    let contexts = bot.retrieve("when do sparrows migrate?");
    assert_eq!(contexts.len(), 2);
    assert_eq!(contexts[0].document.id, "a_doc");
    assert_eq!(contexts[0].document.title, "A Doc");
}

#[test]
fn construction_fails_on_empty_corpus() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "not markdown").unwrap();
    let err = QaBot::new(dir.path(), 3).unwrap_err();
    assert!(err.to_string().contains("no markdown documents"));
}

#[test]
fn construction_fails_on_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent");
    let err = QaBot::new(&missing, 3).unwrap_err();
    assert!(err.to_string().contains("not found"));
}
