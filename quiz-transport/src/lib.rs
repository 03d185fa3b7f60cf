//! Concrete collaborators for the quiz wizard.
//!
//! - [`JsonFileSource`] - reads a question file (flat list or nested authoring format)
//! - [`HttpSource`] and [`HttpSink`] - talk to the questionnaire backend
//! - [`CsvSink`] - appends each submission to a CSV response log
//!
//! # Example
//!
//! ```rust,ignore
//! use quiz_flow::Session;
//! use quiz_transport::{CsvSink, JsonFileSource};
//!
//! let mut session = Session::new();
//! session.load(&JsonFileSource::new("questions.json"));
//! // ... drive the session from a front end ...
//! session.submit(&CsvSink::new("responses.csv"));
//! ```

mod error;
pub use error::TransportError;

pub mod document;
pub use document::parse_questions;

mod file;
pub use file::JsonFileSource;

mod http;
pub use http::{DEFAULT_TIMEOUT, HttpSink, HttpSource};

mod response_log;
pub use response_log::{COMPANY_QUESTION, CsvSink, EMAIL_QUESTION, HEADER};
