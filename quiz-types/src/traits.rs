use crate::{Answer, Question};

/// Collaborator that provides the full question catalog.
///
/// Called exactly once per session. Failures are reported to the user and
/// end the session; the core never retries.
pub trait QuestionSource {
    /// The error type for this source.
    type Error: Into<anyhow::Error>;

    /// Fetch every question, in catalog order.
    fn fetch_all(&self) -> Result<Vec<Question>, Self::Error>;
}

/// Collaborator that receives the final answers.
///
/// Each answer carries the literal question text and the string encoding of
/// the answer (comma-joined for multi-choice).
pub trait SubmitSink {
    /// The error type for this sink.
    type Error: Into<anyhow::Error>;

    /// Deliver the answers, index-aligned with the final active question list.
    fn submit(&self, answers: &[Answer]) -> Result<(), Self::Error>;
}
