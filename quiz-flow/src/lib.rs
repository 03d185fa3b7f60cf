//! # quiz-flow
//!
//! The question-flow controller of the quiz wizard. Presentation-agnostic.
//!
//! `FlowState` holds the catalog, the active question list, the answers and
//! the cursor. Its transitions take the state by value and return the next
//! state, so every rule can be checked without a UI. `Session` wraps it
//! in the load / answer / submit lifecycle and is what a front end drives.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quiz_flow::{RawInput, Session};
//!
//! let mut session = Session::new();
//! session.load(&source);
//!
//! while let Some(view) = session.display_state() {
//!     render(&view);
//!     let raw: RawInput = read_input(&view);
//!     match session.go_next(&raw) {
//!         Ok(NextOutcome::ReadyToSubmit) => break,
//!         Ok(_) => {}
//!         Err(err) => show_inline(err),
//!     }
//! }
//!
//! session.submit(&sink);
//! ```
//!
//! ## Branching
//!
//! The third question (zero-based index 2) is the checkpoint. The first time
//! the user moves past it, the categories they picked there pull the matching
//! branch questions from the catalog, each category introduced by a heading.
//! This happens once per session.

// Re-export all types from quiz-types
pub use quiz_types::*;

pub mod branch;

mod state;
pub use state::{Advance, DisplayState, FlowState, ForwardLabel};

mod session;
pub use session::{NextOutcome, Phase, Session};

// Test doubles for driving a session without real I/O
pub mod test_support;
