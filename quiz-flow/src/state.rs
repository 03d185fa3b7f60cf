use std::fmt;

use quiz_types::{
    Answer, Catalog, LoadError, Question, QuestionKind, RawInput, Submission, ValidationError,
    validate_answer,
};

use crate::branch::{self, CHECKPOINT_INDEX};

/// Label of the forward action for the question on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardLabel {
    Next,
    Submit,
}

impl ForwardLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Submit => "Submit",
        }
    }
}

impl fmt::Display for ForwardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a front end needs to render one question.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState<'a> {
    /// Zero-based position in the active list.
    pub index: usize,
    /// Length of the active list.
    pub total: usize,
    pub question: &'a Question,
    /// Stored answer to pre-populate the input with.
    pub answer: &'a str,
    /// For choice questions: which options are checked, aligned with `question.options()`.
    pub selected: Vec<bool>,
    /// `(index + 1) / total`.
    pub progress: f64,
    pub can_go_back: bool,
    pub forward: ForwardLabel,
}

impl DisplayState<'_> {
    /// Caption like `Question 3 of 8`.
    pub fn position(&self) -> String {
        format!("Question {} of {}", self.index + 1, self.total)
    }

    /// Option values that are currently checked, in presentation order.
    pub fn selected_values(&self) -> impl Iterator<Item = &str> {
        self.question
            .options()
            .iter()
            .zip(&self.selected)
            .filter(|(_, checked)| **checked)
            .map(|(option, _)| option.as_str())
    }
}

/// Result of moving forward from a validated question.
#[derive(Debug)]
pub enum Advance {
    /// The cursor moved. The active list may have been expanded on the way.
    Moved(FlowState),
    /// The last question was answered; the session ends with this payload.
    Complete(Submission),
}

/// The complete state of a running questionnaire.
///
/// Transitions consume the state and return the next one. `active` and
/// `answers` always have the same length and `answers[i].question` is
/// `active[i].text()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowState {
    catalog: Catalog,
    active: Vec<Question>,
    answers: Vec<Answer>,
    cursor: usize,
    expanded: bool,
}

impl FlowState {
    /// Start a questionnaire on the `common` questions of a catalog.
    pub fn initialize(catalog: Catalog) -> Result<Self, LoadError> {
        if catalog.is_empty() {
            return Err(LoadError::EmptyCatalog);
        }
        let active: Vec<Question> = catalog.common().cloned().collect();
        if active.is_empty() {
            return Err(LoadError::NoCommonQuestions);
        }
        let answers = active.iter().map(Answer::empty_for).collect();

        Ok(Self {
            catalog,
            active,
            answers,
            cursor: 0,
            expanded: false,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The questions currently being asked.
    pub fn active(&self) -> &[Question] {
        &self.active
    }

    /// The answers, index-aligned with `active()`.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the checkpoint has already expanded the active list.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn current_question(&self) -> &Question {
        &self.active[self.cursor]
    }

    pub fn current_answer(&self) -> &Answer {
        &self.answers[self.cursor]
    }

    fn is_last(&self) -> bool {
        self.cursor + 1 == self.active.len()
    }

    /// Render data for the question at `index`, or `None` if out of range.
    pub fn display_state(&self, index: usize) -> Option<DisplayState<'_>> {
        let question = self.active.get(index)?;
        let answer = self.answers.get(index)?.answer.as_str();
        let total = self.active.len();

        let selected = match question.kind() {
            QuestionKind::SingleChoice => question.options().iter().map(|o| o == answer).collect(),
            QuestionKind::MultiChoice => {
                let chosen: Vec<&str> = answer.split(',').collect();
                question
                    .options()
                    .iter()
                    .map(|o| chosen.contains(&o.as_str()))
                    .collect()
            }
            _ => Vec::new(),
        };

        Some(DisplayState {
            index,
            total,
            question,
            answer,
            selected,
            progress: (index + 1) as f64 / total as f64,
            can_go_back: index > 0,
            forward: if index + 1 == total {
                ForwardLabel::Submit
            } else {
                ForwardLabel::Next
            },
        })
    }

    /// Store the encoded raw input as the answer at `index`.
    ///
    /// Headings and out-of-range indices are left untouched.
    pub fn record_answer(mut self, index: usize, raw: &RawInput) -> Self {
        if let Some(question) = self.active.get(index)
            && !question.is_heading()
        {
            let encoded = encode_answer(question, raw);
            self.answers[index].answer = encoded;
        }
        self
    }

    /// Store the raw input for the question under the cursor.
    pub fn record_current(self, raw: &RawInput) -> Self {
        let index = self.cursor;
        self.record_answer(index, raw)
    }

    /// Check the stored answer at `index`. Out-of-range indices pass.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        match (self.active.get(index), self.answers.get(index)) {
            (Some(question), Some(answer)) => validate_answer(question.kind(), &answer.answer),
            _ => Ok(()),
        }
    }

    /// Check the stored answer under the cursor.
    pub fn validate_current(&self) -> Result<(), ValidationError> {
        self.validate(self.cursor)
    }

    /// Whether moving forward from here triggers the one-time expansion.
    pub fn at_checkpoint(&self) -> bool {
        !self.expanded && self.cursor == CHECKPOINT_INDEX && self.current_question().is_common()
    }

    /// Move forward from a validated question.
    ///
    /// At the checkpoint the active list is expanded first. At the last
    /// question the state is turned into the final submission.
    pub fn advance(self) -> Advance {
        let state = if self.at_checkpoint() {
            self.expand()
        } else {
            self
        };

        if state.is_last() {
            tracing::info!(answers = state.answers.len(), "last question answered");
            return Advance::Complete(state.into_submission());
        }

        let mut state = state;
        state.cursor += 1;
        tracing::debug!(cursor = state.cursor, total = state.active.len(), "moved forward");
        Advance::Moved(state)
    }

    /// Replace the active list with the common questions plus the branches
    /// picked at the checkpoint. Does nothing once expanded.
    pub fn expand(self) -> Self {
        if self.expanded {
            tracing::debug!("active list already expanded");
            return self;
        }

        let selection = self
            .answers
            .get(CHECKPOINT_INDEX)
            .map(branch::parse_selection)
            .unwrap_or_default();
        let active = branch::expanded_list(&self.catalog, &selection);
        let preserved = self.catalog.common().count();
        let answers = branch::realign_answers(&self.answers, &active, preserved);

        tracing::info!(
            ?selection,
            before = self.active.len(),
            after = active.len(),
            "expanded active question list"
        );

        Self {
            active,
            answers,
            expanded: true,
            ..self
        }
    }

    /// Move back one question. Never re-filters and never validates.
    pub fn go_back(mut self) -> Self {
        if self.cursor > 0 {
            self.cursor -= 1;
            tracing::debug!(cursor = self.cursor, "moved back");
        }
        self
    }

    /// Discard the state, keeping only the answers to submit.
    pub fn into_submission(self) -> Submission {
        Submission::new(self.answers)
    }
}

/// Encode raw input according to the question kind.
///
/// Input of the wrong shape, or choices that are not options of the
/// question, encode as the empty string.
fn encode_answer(question: &Question, raw: &RawInput) -> String {
    match (question.kind(), raw) {
        (kind, RawInput::Text(text)) if kind.is_text() => text.trim().to_string(),
        (QuestionKind::SingleChoice, RawInput::Selected(values)) => values
            .iter()
            .find(|v| question.options().contains(*v))
            .cloned()
            .unwrap_or_default(),
        (QuestionKind::MultiChoice, RawInput::Selected(values)) => question
            .options()
            .iter()
            .filter(|option| values.contains(option))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(","),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use quiz_types::Question;

    use super::*;
    use crate::branch::BRANCH_PROMPT;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Question::common("Company?", QuestionKind::Text),
            Question::common("Email?", QuestionKind::Email),
            Question::choice(BRANCH_PROMPT, QuestionKind::MultiChoice, ["A", "B", "C"], "common"),
            Question::common("Notes?", QuestionKind::LongText),
            Question::choice("Q-A", QuestionKind::SingleChoice, ["Yes", "No"], "A"),
            Question::choice("Q-C", QuestionKind::SingleChoice, ["Yes", "No"], "C"),
        ])
    }

    fn started() -> FlowState {
        FlowState::initialize(catalog()).unwrap()
    }

    fn assert_aligned(state: &FlowState) {
        assert_eq!(state.active().len(), state.answers().len());
        for (question, answer) in state.active().iter().zip(state.answers()) {
            assert_eq!(question.text(), answer.question);
        }
    }

    fn moved(advance: Advance) -> FlowState {
        match advance {
            Advance::Moved(state) => state,
            Advance::Complete(_) => panic!("expected the cursor to move"),
        }
    }

    #[test]
    fn initialize_uses_common_subsequence() {
        let state = started();
        let texts: Vec<_> = state.active().iter().map(Question::text).collect();
        assert_eq!(texts, vec!["Company?", "Email?", BRANCH_PROMPT, "Notes?"]);
        assert_eq!(state.cursor(), 0);
        assert!(!state.is_expanded());
        assert_aligned(&state);
    }

    #[test]
    fn initialize_rejects_empty_catalog() {
        assert!(matches!(
            FlowState::initialize(Catalog::default()),
            Err(LoadError::EmptyCatalog)
        ));

        let only_branches = Catalog::new(vec![Question::new(
            "Q-A",
            QuestionKind::Text,
            Vec::new(),
            "A",
        )]);
        assert!(matches!(
            FlowState::initialize(only_branches),
            Err(LoadError::NoCommonQuestions)
        ));
    }

    #[test]
    fn display_state_reports_progress_and_labels() {
        let state = started();

        let first = state.display_state(0).unwrap();
        assert!(!first.can_go_back);
        assert_eq!(first.forward, ForwardLabel::Next);
        assert_eq!(first.progress, 0.25);
        assert_eq!(first.position(), "Question 1 of 4");

        let last = state.display_state(3).unwrap();
        assert!(last.can_go_back);
        assert_eq!(last.forward, ForwardLabel::Submit);
        assert_eq!(last.progress, 1.0);
        assert_eq!(last.forward.to_string(), "Submit");

        assert!(state.display_state(4).is_none());
    }

    #[test]
    fn text_answers_are_trimmed() {
        let state = started().record_answer(0, &RawInput::text("  Acme Corp \n"));
        assert_eq!(state.answers()[0].answer, "Acme Corp");
        assert_eq!(state.validate(0), Ok(()));
    }

    #[test]
    fn email_validation_round_trip() {
        let state = started().record_answer(1, &RawInput::text("ops@acme.io"));
        assert_eq!(state.validate(1), Ok(()));

        let state = state.record_answer(1, &RawInput::text("not-an-email"));
        assert_eq!(state.validate(1), Err(ValidationError::InvalidEmail));

        let state = state.record_answer(1, &RawInput::text("   "));
        assert_eq!(state.validate(1), Err(ValidationError::Required));
    }

    #[test]
    fn optional_kinds_accept_empty() {
        let state = started()
            .record_answer(2, &RawInput::selected(Vec::<String>::new()))
            .record_answer(3, &RawInput::text(""));
        assert_eq!(state.validate(2), Ok(()));
        assert_eq!(state.validate(3), Ok(()));
    }

    #[test]
    fn multi_choice_round_trip() {
        let state = started().record_answer(2, &RawInput::selected(["C", "A"]));
        assert_eq!(state.answers()[2].answer, "A,C");

        let view = state.display_state(2).unwrap();
        assert_eq!(view.selected, vec![true, false, true]);
        assert_eq!(view.selected_values().collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn choices_outside_options_are_dropped() {
        let state = started().record_answer(2, &RawInput::selected(["Z"]));
        assert_eq!(state.answers()[2].answer, "");
    }

    #[test]
    fn mismatched_input_records_empty() {
        let state = started()
            .record_answer(0, &RawInput::text("Acme"))
            .record_answer(0, &RawInput::selected(["Acme"]));
        assert_eq!(state.answers()[0].answer, "");
        assert_eq!(state.validate(0), Err(ValidationError::Required));
    }

    #[test]
    fn out_of_range_record_is_ignored() {
        let before = started();
        let after = before.clone().record_answer(99, &RawInput::text("x"));
        assert_eq!(before, after);
    }

    #[test]
    fn checkpoint_expands_once_and_preserves_answers() {
        let state = started()
            .record_answer(0, &RawInput::text("Acme"))
            .record_answer(1, &RawInput::text("ops@acme.io"));
        let state = moved(state.advance());
        let state = moved(state.advance());
        assert!(state.at_checkpoint());

        let state = state.record_current(&RawInput::selected(["C", "A"]));
        let state = moved(state.advance());

        assert!(state.is_expanded());
        assert_eq!(state.cursor(), 3);
        let texts: Vec<_> = state.active().iter().map(Question::text).collect();
        assert_eq!(
            texts,
            vec!["Company?", "Email?", BRANCH_PROMPT, "Notes?", "A", "Q-A", "C", "Q-C"]
        );
        assert_eq!(state.answers()[0].answer, "Acme");
        assert_eq!(state.answers()[1].answer, "ops@acme.io");
        assert_eq!(state.answers()[2].answer, "A,C");
        assert_aligned(&state);

        // Back past the checkpoint and forward again: no second expansion.
        let state = state.go_back();
        assert_eq!(state.cursor(), 2);
        assert!(!state.at_checkpoint());
        let state = moved(state.advance());
        assert_eq!(state.active().len(), 8);
        assert_eq!(state.active().iter().filter(|q| q.is_heading()).count(), 2);
    }

    #[test]
    fn expand_is_idempotent() {
        let state = started()
            .record_answer(2, &RawInput::selected(["A"]))
            .expand();
        let again = state.clone().expand();
        assert_eq!(state, again);
    }

    #[test]
    fn checkpoint_as_last_question_submits() {
        let catalog = Catalog::new(vec![
            Question::common("Company?", QuestionKind::Text),
            Question::common("Email?", QuestionKind::Email),
            Question::choice(BRANCH_PROMPT, QuestionKind::MultiChoice, ["A"], "common"),
            Question::choice("Q-A", QuestionKind::SingleChoice, ["Yes", "No"], "A"),
        ]);
        let state = FlowState::initialize(catalog).unwrap();
        let state = moved(state.advance());
        let state = moved(state.advance());

        match state.advance() {
            Advance::Complete(submission) => assert_eq!(submission.len(), 3),
            Advance::Moved(_) => panic!("nothing selected, nothing left to ask"),
        }
    }

    #[test]
    fn go_back_at_start_stays() {
        let state = started().go_back();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn last_question_completes() {
        let state = FlowState::initialize(Catalog::new(vec![Question::common(
            "Only?",
            QuestionKind::Text,
        )]))
        .unwrap()
        .record_current(&RawInput::text("yes"));

        match state.advance() {
            Advance::Complete(submission) => {
                assert_eq!(submission.responses, vec![Answer::new("Only?", "yes")]);
            }
            Advance::Moved(_) => panic!("single question must complete"),
        }
    }

    #[test]
    fn headings_ignore_input_and_always_validate() {
        let state = started()
            .record_answer(2, &RawInput::selected(["A"]))
            .expand()
            .record_answer(4, &RawInput::text("typed into a heading"));
        assert!(state.active()[4].is_heading());
        assert_eq!(state.answers()[4].answer, "");
        assert_eq!(state.validate(4), Ok(()));
    }
}
