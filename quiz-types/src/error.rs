/// The question catalog could not be loaded. Fatal to the session.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The question source failed (I/O, HTTP, malformed data).
    #[error("Error loading questions: {0}")]
    Fetch(#[source] anyhow::Error),

    /// The source returned no questions at all.
    #[error("Error loading questions: the question set is empty")]
    EmptyCatalog,

    /// The source returned questions, but none that are always shown.
    #[error("Error loading questions: no common questions to start with")]
    NoCommonQuestions,
}

/// The current answer is not acceptable. Blocks only forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide a valid answer before proceeding.")]
    Required,

    #[error("Please enter a valid email address before proceeding.")]
    InvalidEmail,
}

/// The collected answers could not be submitted. Recoverable by restarting.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Submission error: {0}")]
    Sink(#[source] anyhow::Error),
}
