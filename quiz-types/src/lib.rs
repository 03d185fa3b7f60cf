//! Core types for the quiz wizard.
//!
//! This crate provides the foundational types for running a questionnaire:
//! - `Question`, `QuestionKind` and `Catalog` - The loaded question set
//! - `Answer` and `Submission` - Collected data as it is sent to a sink
//! - `RawInput` - What the presentation layer hands over for the current question
//! - `QuestionSource` and `SubmitSink` traits - The two I/O collaborators

mod question;
pub use question::{COMMON_CATEGORY, Question, QuestionKind};

mod catalog;
pub use catalog::Catalog;

mod answer;
pub use answer::{Answer, Submission};

mod raw_input;
pub use raw_input::RawInput;

mod validation;
pub use validation::{is_valid_email, validate_answer};

mod error;
pub use error::{LoadError, SubmitError, ValidationError};

mod traits;
pub use traits::{QuestionSource, SubmitSink};
