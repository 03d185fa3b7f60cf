/// The value the presentation layer read for the current question.
///
/// This is the only thing the flow controller needs from the UI. How it was
/// collected (text field, radio buttons, check boxes) is not its concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawInput {
    /// No input element was shown (headings) or nothing could be read.
    #[default]
    Nothing,

    /// Contents of a free-form text field, untrimmed.
    Text(String),

    /// The option values that are currently checked.
    Selected(Vec<String>),
}

impl RawInput {
    /// Create a text input.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a selection from option values.
    pub fn selected<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selected(values.into_iter().map(Into::into).collect())
    }

    /// Create a selection holding at most one option value.
    pub fn single(value: Option<impl Into<String>>) -> Self {
        Self::Selected(value.into_iter().map(Into::into).collect())
    }
}
