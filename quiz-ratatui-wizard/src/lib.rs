//! Terminal front end for the quiz wizard.
//!
//! [`RatatuiWizard`] drives a `quiz_flow::Session` from keyboard input and
//! draws one question per screen, with a progress gauge and a help bar.
//!
//! # Example
//!
//! ```rust,ignore
//! use quiz_ratatui_wizard::{Outcome, RatatuiWizard};
//!
//! let outcome = RatatuiWizard::new()
//!     .with_title("Cybersecurity Assessment")
//!     .run(&source, &sink)?;
//! assert_eq!(outcome, Outcome::Submitted);
//! ```

mod backend;
mod input;
mod ui;

pub use backend::{Outcome, RatatuiError, RatatuiWizard, Theme};
