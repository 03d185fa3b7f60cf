//! Question file formats.
//!
//! Two layouts are accepted. The flat wire list is what the backend serves
//! from `/questions`:
//!
//! ```json
//! [{ "text": "...", "type": "radio", "options": ["Yes", "No"], "category": "GDPR" }]
//! ```
//!
//! The nested authoring format groups branch questions by category and
//! attaches a recommendation to every response option:
//!
//! ```json
//! {
//!   "common": [{ "text": "...", "type": "text" }],
//!   "compliance_categories": [{
//!     "name": "GDPR",
//!     "questions": [{
//!       "question": "...",
//!       "response_options": [{ "option": "Yes", "recommendation": "..." }]
//!     }]
//!   }]
//! }
//! ```
//!
//! Nested documents are flattened: common questions first, then every
//! category's questions in file order as single-choice questions.

use serde::Deserialize;
use serde_json::Value;

use quiz_types::{COMMON_CATEGORY, Question, QuestionKind};

use crate::TransportError;

/// Category name used when a nested category has none.
pub const UNNAMED_CATEGORY: &str = "Unknown";

/// Parse either question file layout into a flat question list.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, TransportError> {
    let value: Value = serde_json::from_str(json)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }

    let document: NestedDocument = serde_json::from_value(value)?;
    Ok(document.flatten())
}

#[derive(Debug, Deserialize)]
struct NestedDocument {
    #[serde(default)]
    common: Vec<CommonEntry>,

    #[serde(default)]
    compliance_categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CommonEntry {
    #[serde(default)]
    text: String,

    #[serde(rename = "type")]
    kind: QuestionKind,

    #[serde(default)]
    options: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    #[serde(default = "unnamed_category")]
    name: String,

    #[serde(default)]
    questions: Vec<CategoryQuestion>,
}

fn unnamed_category() -> String {
    UNNAMED_CATEGORY.to_string()
}

#[derive(Debug, Deserialize)]
struct CategoryQuestion {
    #[serde(default)]
    question: String,

    #[serde(default)]
    response_options: Vec<ResponseOption>,
}

/// Recommendation texts belong to the report, not the questionnaire.
#[derive(Debug, Deserialize)]
struct ResponseOption {
    #[serde(default)]
    option: String,
}

impl NestedDocument {
    fn flatten(self) -> Vec<Question> {
        let common = self
            .common
            .into_iter()
            .map(|entry| Question::new(entry.text, entry.kind, entry.options, COMMON_CATEGORY));

        let branches = self.compliance_categories.into_iter().flat_map(|category| {
            let name = category.name;
            category.questions.into_iter().map(move |q| {
                Question::new(
                    q.question,
                    QuestionKind::SingleChoice,
                    q.response_options.into_iter().map(|o| o.option).collect(),
                    name.clone(),
                )
            })
        });

        common.chain(branches).collect()
    }
}
