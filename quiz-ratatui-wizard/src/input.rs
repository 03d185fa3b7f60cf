//! Editing state for the question on screen.

use quiz_flow::{DisplayState, Question, QuestionKind, RawInput};

/// What the user has typed or ticked for the current question.
///
/// Rebuilt from the session's `DisplayState` whenever the cursor moves, so
/// previously recorded answers reappear when navigating back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct InputState {
    /// Text field contents.
    pub text: String,
    /// Cursor position in `text`, counted in characters.
    pub cursor: usize,
    /// Highlighted option for choice questions.
    pub highlighted: usize,
    /// Checked options for choice questions.
    pub selected: Vec<bool>,
    /// Inline validation message.
    pub error: Option<String>,
}

impl InputState {
    pub fn from_display(view: Option<&DisplayState<'_>>) -> Self {
        let Some(view) = view else {
            return Self::default();
        };

        let text = if view.question.kind().is_text() {
            view.answer.to_string()
        } else {
            String::new()
        };

        Self {
            cursor: text.chars().count(),
            text,
            highlighted: view.selected.iter().position(|&s| s).unwrap_or(0),
            selected: view.selected.clone(),
            error: None,
        }
    }

    /// The value to hand to the session for `question`.
    pub fn raw_input(&self, question: &Question) -> RawInput {
        match question.kind() {
            QuestionKind::Heading => RawInput::Nothing,
            kind if kind.is_text() => RawInput::text(self.text.as_str()),
            _ => RawInput::selected(
                question
                    .options()
                    .iter()
                    .zip(&self.selected)
                    .filter(|(_, checked)| **checked)
                    .map(|(option, _)| option.as_str()),
            ),
        }
    }

    fn byte_offset(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset();
        self.text.insert(at, c);
        self.cursor += 1;
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.text.remove(at);
            self.error = None;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_offset();
            self.text.remove(at);
            self.error = None;
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.highlighted + 1 < self.selected.len() {
            self.highlighted += 1;
        }
    }

    /// Toggle the highlighted option. Single-choice questions keep at most one.
    pub fn toggle(&mut self, kind: QuestionKind) {
        let Some(current) = self.selected.get(self.highlighted).copied() else {
            return;
        };
        if kind == QuestionKind::SingleChoice {
            self.selected.iter_mut().for_each(|s| *s = false);
            self.selected[self.highlighted] = true;
        } else {
            self.selected[self.highlighted] = !current;
        }
        self.error = None;
    }
}
