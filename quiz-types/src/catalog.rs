use crate::Question;

/// The complete, ordered question set loaded at session start.
///
/// A catalog is never mutated after loading. The active question list is
/// always derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Create a catalog from the loaded questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Get all questions in load order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate over the `common` questions in load order.
    pub fn common(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_common())
    }

    /// Find the first question whose text matches exactly.
    pub fn find_by_text(&self, text: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.text() == text)
    }

    /// Check if the catalog has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

impl From<Vec<Question>> for Catalog {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl FromIterator<Question> for Catalog {
    fn from_iter<T: IntoIterator<Item = Question>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionKind;

    #[test]
    fn common_keeps_load_order() {
        let catalog: Catalog = [
            Question::common("a", QuestionKind::Text),
            Question::new("x", QuestionKind::Text, Vec::new(), "gdpr"),
            Question::common("b", QuestionKind::Email),
        ]
        .into_iter()
        .collect();

        let texts: Vec<_> = catalog.common().map(Question::text).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(catalog.find_by_text("x").unwrap().category(), "gdpr");
        assert!(catalog.find_by_text("missing").is_none());
    }

    #[test]
    fn from_question_list() {
        let catalog = Catalog::from(vec![Question::common("a", QuestionKind::Text)]);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
