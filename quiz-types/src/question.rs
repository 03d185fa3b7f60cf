use serde::{Deserialize, Serialize};

/// Category tag of questions that are always shown.
pub const COMMON_CATEGORY: &str = "common";

fn common_category() -> String {
    COMMON_CATEGORY.to_string()
}

/// A single question in the catalog.
///
/// Questions are immutable once loaded. The serialized form matches the flat
/// question list served by the questionnaire backend:
/// `{ "text": ..., "type": ..., "options": [...], "category": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt text shown to the user. Also the key answers are submitted under.
    text: String,

    /// The kind of question (determines input type and validation).
    #[serde(rename = "type")]
    kind: QuestionKind,

    /// Selectable values for choice questions, in presentation order.
    #[serde(default)]
    options: Vec<String>,

    /// Grouping tag. `"common"` questions are always asked.
    #[serde(default = "common_category")]
    category: String,
}

impl Question {
    /// Create a new question in the given category.
    pub fn new(
        text: impl Into<String>,
        kind: QuestionKind,
        options: Vec<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
            options,
            category: category.into(),
        }
    }

    /// Create a question in the `common` category.
    pub fn common(text: impl Into<String>, kind: QuestionKind) -> Self {
        Self::new(text, kind, Vec::new(), COMMON_CATEGORY)
    }

    /// Create a choice question with the given options.
    pub fn choice<I, S>(
        text: impl Into<String>,
        kind: QuestionKind,
        options: I,
        category: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            text,
            kind,
            options.into_iter().map(Into::into).collect(),
            category,
        )
    }

    /// Create a section heading for a category run.
    ///
    /// The heading's text and category are both the category name.
    pub fn heading(category: impl Into<String>) -> Self {
        let category = category.into();
        Self {
            text: category.clone(),
            kind: QuestionKind::Heading,
            options: Vec::new(),
            category,
        }
    }

    /// Get the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Get the options (empty for non-choice questions).
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Get the category tag.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Check if this question is always shown.
    pub fn is_common(&self) -> bool {
        self.category == COMMON_CATEGORY
    }

    /// Check if this is a section heading.
    pub fn is_heading(&self) -> bool {
        self.kind == QuestionKind::Heading
    }
}

/// The kind of question, determining input type and validation.
///
/// Wire names follow the HTML input element each kind is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Non-interactive section separator. Never stores an answer.
    #[serde(rename = "heading")]
    Heading,

    /// Single-line text. Required.
    #[serde(rename = "text")]
    Text,

    /// Single-line email address. Required and pattern-checked.
    #[serde(rename = "email")]
    Email,

    /// Free-form multi-line text. Optional.
    #[serde(rename = "textarea", alias = "long_text")]
    LongText,

    /// Pick exactly one option. Required.
    #[serde(rename = "radio", alias = "single_choice")]
    SingleChoice,

    /// Pick any number of options. Optional.
    #[serde(rename = "checkbox", alias = "multi_choice")]
    MultiChoice,
}

impl QuestionKind {
    /// Check if this kind takes free-form text.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::LongText)
    }

    /// Check if this kind selects from `options`.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }

    /// Check if an empty answer fails validation.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::SingleChoice)
    }
}
