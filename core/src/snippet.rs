use crate::document::Document;

/// Pick one line of `document` to quote for `question`.
///
/// Single pass over trimmed, non-blank lines in original order, with a fixed
/// priority: a "pip install" line returns immediately, then the first line
/// mentioning "install", then the first line sharing a token with the
/// question, then the first non-header line, then the first line verbatim.
/// The candidate slots are write-once; refactoring this into multiple passes
/// would change which line wins under the first-match rule.
pub fn extract_snippet(document: &Document, question: &str) -> String {
    let lowered_question = question.to_lowercase();
    let question_terms: Vec<&str> = lowered_question.split_whitespace().collect();
    let lines: Vec<&str> = document
        .content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut install_candidate: Option<&str> = None;
    let mut token_candidate: Option<&str> = None;

    for &line in &lines {
        let lower_line = line.to_lowercase();
        if lower_line.starts_with('#') {
            continue;
        }
        if lower_line.contains("pip install") {
            return line.to_string();
        }
        if install_candidate.is_none() && lower_line.contains("install") {
            install_candidate = Some(line);
        }
        // This check still runs on a line that just became the install
        // candidate; a line may fill both slots.
        if token_candidate.is_none()
            && (lower_line
                .split_whitespace()
                .any(|token| lowered_question.contains(token))
                || question_terms.iter().any(|term| lower_line.contains(term)))
        {
            token_candidate = Some(line);
        }
    }

    if let Some(line) = install_candidate {
        return line.to_string();
    }
    if let Some(line) = token_candidate {
        return line.to_string();
    }
    for &line in &lines {
        if !line.starts_with('#') {
            return line.to_string();
        }
    }
    lines.first().map(|line| line.to_string()).unwrap_or_default()
}
