//! Derivation of the expanded question list at the checkpoint.
//!
//! Everything here is a pure function of the catalog and the recorded
//! answers; `FlowState::expand` only installs the results.

use quiz_types::{Answer, Catalog, Question};

/// Zero-based index of the question whose answer picks the branches.
pub const CHECKPOINT_INDEX: usize = 2;

/// Text of the catalog question whose options define category precedence.
pub const BRANCH_PROMPT: &str = "Which compliance test do you want to take?";

/// Split the checkpoint answer into the selected category names.
pub fn parse_selection(answer: &Answer) -> Vec<&str> {
    answer.values().collect()
}

/// Category precedence, taken from the options of the branching prompt.
///
/// Empty when the catalog has no such question; the branch order is then
/// the catalog order.
pub fn category_order(catalog: &Catalog) -> &[String] {
    catalog
        .find_by_text(BRANCH_PROMPT)
        .map(Question::options)
        .unwrap_or_default()
}

/// Select the branch questions for the chosen categories.
///
/// Questions are stably sorted by the position of their category in the
/// precedence order. Categories missing from the order come first. Each run
/// of one category is introduced by a heading named after it.
pub fn branch_questions(catalog: &Catalog, selection: &[&str]) -> Vec<Question> {
    let order = category_order(catalog);

    let mut selected: Vec<&Question> = catalog
        .questions()
        .iter()
        .filter(|q| !q.is_common() && selection.contains(&q.category()))
        .collect();

    // `None` sorts before every `Some`, which puts unknown categories first.
    selected.sort_by_key(|q| order.iter().position(|c| c == q.category()));

    let mut with_headings = Vec::with_capacity(selected.len() + selection.len());
    let mut last_category: Option<&str> = None;
    for question in selected {
        if last_category != Some(question.category()) {
            with_headings.push(Question::heading(question.category()));
            last_category = Some(question.category());
        }
        with_headings.push(question.clone());
    }
    with_headings
}

/// Build the full active list after the checkpoint: every common question
/// in catalog order, followed by the selected branches.
pub fn expanded_list(catalog: &Catalog, selection: &[&str]) -> Vec<Question> {
    catalog
        .common()
        .cloned()
        .chain(branch_questions(catalog, selection))
        .collect()
}

/// Rebuild the answer set for a new active list.
///
/// The first `preserved` answers are carried over when the question at that
/// position is unchanged; every other slot starts empty.
pub fn realign_answers(previous: &[Answer], active: &[Question], preserved: usize) -> Vec<Answer> {
    active
        .iter()
        .enumerate()
        .map(|(i, question)| match previous.get(i) {
            Some(old) if i < preserved && old.question == question.text() => old.clone(),
            _ => Answer::empty_for(question),
        })
        .collect()
}
