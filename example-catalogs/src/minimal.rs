//! Smallest catalog that exercises branching: three common questions, two
//! GDPR questions and one PCI question.

use quiz_types::{Catalog, Question, QuestionKind};

/// Build the catalog. The checkpoint question lists `gdpr` before `pci`.
pub fn gdpr_pci() -> Catalog {
    Catalog::new(vec![
        Question::common("What is your name?", QuestionKind::Text),
        Question::common("Who is your manager?", QuestionKind::Text),
        Question::choice(
            "Which compliance test do you want to take?",
            QuestionKind::MultiChoice,
            ["gdpr", "pci"],
            "common",
        ),
        Question::new(
            "Who is your data controller?",
            QuestionKind::Text,
            Vec::new(),
            "gdpr",
        ),
        Question::new(
            "Where is personal data stored?",
            QuestionKind::Text,
            Vec::new(),
            "gdpr",
        ),
        Question::new(
            "Which processor handles card payments?",
            QuestionKind::Text,
            Vec::new(),
            "pci",
        ),
    ])
}
