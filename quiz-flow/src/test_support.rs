//! Collaborators for running a session without real I/O.
//!
//! `StaticSource` serves a fixed catalog and `RecordingSink` keeps every
//! submission it receives, so tests can drive a `Session` end to end. The
//! failing variants exercise the error paths.
//!
//! # Example
//!
//! ```rust
//! use quiz_flow::test_support::{RecordingSink, StaticSource};
//! use quiz_flow::{Question, QuestionKind, RawInput, Session};
//!
//! let source = StaticSource::new(vec![Question::common("Name?", QuestionKind::Text)]);
//! let sink = RecordingSink::new();
//!
//! let mut session = Session::new();
//! session.load(&source);
//! session.go_next(&RawInput::text("Alice")).unwrap();
//! session.submit(&sink);
//!
//! assert_eq!(sink.submissions()[0].answer_for("Name?"), Some("Alice"));
//! ```

use std::cell::RefCell;

use crate::{Answer, Question, QuestionSource, SubmitSink, Submission};

/// A question source that returns a pre-configured catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    questions: Vec<Question>,
}

impl StaticSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

/// Error type for the test collaborators.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TestIoError(String);

impl QuestionSource for StaticSource {
    type Error = TestIoError;

    fn fetch_all(&self) -> Result<Vec<Question>, Self::Error> {
        Ok(self.questions.clone())
    }
}

/// A question source that always fails.
#[derive(Debug, Clone)]
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl QuestionSource for FailingSource {
    type Error = TestIoError;

    fn fetch_all(&self) -> Result<Vec<Question>, Self::Error> {
        Err(TestIoError(self.message.clone()))
    }
}

/// A sink that keeps every submission in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: RefCell<Vec<Submission>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submission received so far, oldest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.received.borrow().clone()
    }
}

impl SubmitSink for RecordingSink {
    type Error = TestIoError;

    fn submit(&self, answers: &[Answer]) -> Result<(), Self::Error> {
        self.received
            .borrow_mut()
            .push(Submission::new(answers.to_vec()));
        Ok(())
    }
}

/// A sink that always fails.
#[derive(Debug, Clone)]
pub struct FailingSink {
    message: String,
}

impl FailingSink {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl SubmitSink for FailingSink {
    type Error = TestIoError;

    fn submit(&self, _answers: &[Answer]) -> Result<(), Self::Error> {
        Err(TestIoError(self.message.clone()))
    }
}
