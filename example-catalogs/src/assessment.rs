//! The cybersecurity self-assessment the wizard was built for.

use quiz_types::{Catalog, Question, QuestionKind};

pub const COMPANY_PROMPT: &str = "What is your company's name?";
pub const EMAIL_PROMPT: &str = "What is your email address?";

/// The assessment in the nested authoring format served from `questions.json`.
pub const QUESTIONS_JSON: &str = include_str!("../data/questions.json");

/// The same assessment as `QUESTIONS_JSON`, already flattened.
///
/// Common questions come first, then every category's questions in file
/// order. Category questions are single choice.
pub fn cybersecurity_assessment() -> Catalog {
    let yes_no = ["Yes", "No"];

    Catalog::new(vec![
        Question::common(COMPANY_PROMPT, QuestionKind::Text),
        Question::common(EMAIL_PROMPT, QuestionKind::Email),
        Question::choice(
            "Which compliance test do you want to take?",
            QuestionKind::MultiChoice,
            ["GDPR", "HIPAA", "PCI-DSS"],
            "common",
        ),
        Question::choice(
            "How many employees does your company have?",
            QuestionKind::SingleChoice,
            ["1-10", "11-50", "51-250", "More than 250"],
            "common",
        ),
        Question::common(
            "Is there anything else we should know?",
            QuestionKind::LongText,
        ),
        Question::choice(
            "Do you store cardholder data after authorization?",
            QuestionKind::SingleChoice,
            yes_no,
            "PCI-DSS",
        ),
        Question::choice(
            "Have you appointed a Data Protection Officer?",
            QuestionKind::SingleChoice,
            ["Yes", "No", "Not sure"],
            "GDPR",
        ),
        Question::choice(
            "Do you keep a record of processing activities?",
            QuestionKind::SingleChoice,
            yes_no,
            "GDPR",
        ),
        Question::choice(
            "Is protected health information encrypted at rest?",
            QuestionKind::SingleChoice,
            ["Yes", "Partially", "No"],
            "HIPAA",
        ),
    ])
}
