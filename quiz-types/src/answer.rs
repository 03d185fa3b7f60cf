use serde::{Deserialize, Serialize};

use crate::Question;

/// The recorded answer for one question.
///
/// `answer` is the string encoding sent to the sink: free-form text, a single
/// option value, or comma-joined option values for multi-choice questions.
/// Unanswered questions and headings carry the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The literal question text.
    pub question: String,

    /// The encoded answer.
    pub answer: String,
}

impl Answer {
    /// Create an answer.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Create an unanswered slot for a question.
    pub fn empty_for(question: &Question) -> Self {
        Self::new(question.text(), String::new())
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// Split a multi-choice encoding into its trimmed, non-empty values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.answer
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// The final answer sequence handed to a `SubmitSink`.
///
/// Serializes to `{"responses": [{"question": ..., "answer": ...}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub responses: Vec<Answer>,
}

impl Submission {
    /// Wrap a list of answers.
    pub fn new(responses: Vec<Answer>) -> Self {
        Self { responses }
    }

    /// Find the answer recorded for a question text.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        self.responses
            .iter()
            .find(|r| r.question == question)
            .map(|r| r.answer.as_str())
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_trimmed_and_skip_empty() {
        let answer = Answer::new("q", " gdpr, pci ,,");
        let values: Vec<_> = answer.values().collect();
        assert_eq!(values, vec!["gdpr", "pci"]);
    }

    #[test]
    fn empty_answer_has_no_values() {
        assert_eq!(Answer::new("q", "").values().count(), 0);
    }

    #[test]
    fn submission_wire_format() {
        let submission = Submission::new(vec![Answer::new("Name?", "Alice")]);
        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"{"responses":[{"question":"Name?","answer":"Alice"}]}"#);
        assert_eq!(submission.answer_for("Name?"), Some("Alice"));
        assert_eq!(submission.answer_for("Other?"), None);
    }
}
