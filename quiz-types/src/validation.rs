use std::sync::LazyLock;

use regex::Regex;

use crate::{QuestionKind, ValidationError};

/// Local part, `@`, then a domain with at least one inner dot. No whitespace
/// and no second `@` anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Check an address against the simplified email rule.
///
/// Internationalized domains and quoted local parts are not handled.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate a stored answer for a question kind.
///
/// Headings always pass. Text, Email and SingleChoice require a non-empty
/// answer; LongText and MultiChoice may stay empty.
pub fn validate_answer(kind: QuestionKind, answer: &str) -> Result<(), ValidationError> {
    if kind == QuestionKind::Heading {
        return Ok(());
    }
    if answer.is_empty() {
        return if kind.is_required() {
            Err(ValidationError::Required)
        } else {
            Ok(())
        };
    }
    if kind == QuestionKind::Email && !is_valid_email(answer) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
