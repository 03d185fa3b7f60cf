//! The session lifecycle around a `FlowState`.
//!
//! A session is driven by exactly one actor. Each method applies a whole
//! transition before returning; calls that make no sense in the current
//! phase are ignored.

use quiz_types::{
    Catalog, LoadError, QuestionSource, RawInput, SubmitError, SubmitSink, Submission,
    ValidationError,
};

use crate::{Advance, DisplayState, FlowState};

/// Where the session is in its lifecycle.
#[derive(Debug, Default)]
pub enum Phase {
    /// Waiting for the catalog.
    #[default]
    Loading,

    /// Asking questions.
    Active(FlowState),

    /// All questions answered; the payload waits for the sink.
    Submitting(Submission),

    /// Answers delivered. The session is over.
    Done,

    /// The catalog could not be loaded. The session is over.
    LoadFailed(LoadError),

    /// The sink rejected the answers. `Session::restart` starts over.
    SubmitFailed(SubmitError),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Active(_) => "active",
            Self::Submitting(_) => "submitting",
            Self::Done => "done",
            Self::LoadFailed(_) => "load-failed",
            Self::SubmitFailed(_) => "submit-failed",
        }
    }
}

/// What a forward action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// The cursor moved to `index`.
    Moved { index: usize },

    /// The checkpoint expanded the active list and the cursor moved to `index`.
    Expanded { index: usize, total: usize },

    /// The last question was answered. Call `Session::submit` next.
    ReadyToSubmit,

    /// Not asking questions right now; nothing happened.
    Ignored,
}

/// A single questionnaire run, from loading to submission.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
}

impl Session {
    /// Create a session waiting for its catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The flow state, while questions are being asked.
    pub fn state(&self) -> Option<&FlowState> {
        match &self.phase {
            Phase::Active(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Fetch the catalog and start at the first question.
    ///
    /// Only acts while `Loading`. Any failure ends in `LoadFailed`.
    pub fn load<S: QuestionSource>(&mut self, source: &S) -> &Phase {
        if !matches!(self.phase, Phase::Loading) {
            tracing::debug!(phase = self.phase.name(), "load ignored");
            return &self.phase;
        }

        let loaded = source
            .fetch_all()
            .map_err(|err| LoadError::Fetch(err.into()))
            .and_then(|questions| FlowState::initialize(Catalog::from(questions)));

        self.phase = match loaded {
            Ok(state) => {
                tracing::info!(
                    catalog = state.catalog().len(),
                    active = state.active().len(),
                    "question catalog loaded"
                );
                Phase::Active(state)
            }
            Err(err) => {
                tracing::error!(error = %err, "question catalog unavailable");
                Phase::LoadFailed(err)
            }
        };
        &self.phase
    }

    /// Render data for the question under the cursor.
    pub fn display_state(&self) -> Option<DisplayState<'_>> {
        self.state().and_then(|state| state.display_state(state.cursor()))
    }

    /// Store the input for the current question without moving.
    pub fn record_answer(&mut self, raw: &RawInput) {
        self.update(|state| state.record_current(raw));
    }

    /// Record, validate and move forward.
    ///
    /// A validation failure keeps the recorded answer and the cursor.
    pub fn go_next(&mut self, raw: &RawInput) -> Result<NextOutcome, ValidationError> {
        let state = match std::mem::take(&mut self.phase) {
            Phase::Active(state) => state,
            other => {
                tracing::debug!(phase = other.name(), "forward action ignored");
                self.phase = other;
                return Ok(NextOutcome::Ignored);
            }
        };

        let state = state.record_current(raw);
        if let Err(err) = state.validate_current() {
            tracing::warn!(cursor = state.cursor(), error = %err, "answer rejected");
            self.phase = Phase::Active(state);
            return Err(err);
        }

        let was_expanded = state.is_expanded();
        match state.advance() {
            Advance::Moved(state) => {
                let index = state.cursor();
                let outcome = if state.is_expanded() && !was_expanded {
                    NextOutcome::Expanded {
                        index,
                        total: state.active().len(),
                    }
                } else {
                    NextOutcome::Moved { index }
                };
                self.phase = Phase::Active(state);
                Ok(outcome)
            }
            Advance::Complete(submission) => {
                self.phase = Phase::Submitting(submission);
                Ok(NextOutcome::ReadyToSubmit)
            }
        }
    }

    /// Record the current input (unvalidated) and move back one question.
    pub fn go_back(&mut self, raw: &RawInput) {
        self.update(|state| state.record_current(raw).go_back());
    }

    /// Hand the collected answers to the sink.
    ///
    /// Only acts while `Submitting`. Ends in `Done` or `SubmitFailed`.
    pub fn submit<K: SubmitSink>(&mut self, sink: &K) -> &Phase {
        let submission = match std::mem::take(&mut self.phase) {
            Phase::Submitting(submission) => submission,
            other => {
                tracing::debug!(phase = other.name(), "submit ignored");
                self.phase = other;
                return &self.phase;
            }
        };

        self.phase = match sink.submit(&submission.responses) {
            Ok(()) => {
                tracing::info!(answers = submission.len(), "responses submitted");
                Phase::Done
            }
            Err(err) => {
                let err = SubmitError::Sink(err.into());
                tracing::error!(error = %err, "submission failed");
                Phase::SubmitFailed(err)
            }
        };
        &self.phase
    }

    /// Start over after a failure. The next step is `load`.
    pub fn restart(&mut self) {
        if matches!(self.phase, Phase::SubmitFailed(_) | Phase::LoadFailed(_)) {
            tracing::info!(from = self.phase.name(), "session restarted");
            self.phase = Phase::Loading;
        } else {
            tracing::debug!(phase = self.phase.name(), "restart ignored");
        }
    }

    fn update(&mut self, transition: impl FnOnce(FlowState) -> FlowState) {
        match std::mem::take(&mut self.phase) {
            Phase::Active(state) => self.phase = Phase::Active(transition(state)),
            other => {
                tracing::debug!(phase = other.name(), "input ignored");
                self.phase = other;
            }
        }
    }
}
