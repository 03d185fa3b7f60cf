use std::path::{Path, PathBuf};

use quiz_types::{Question, QuestionSource};

use crate::{TransportError, parse_questions};

/// Reads the question catalog from a local JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonFileSource {
    type Error = TransportError;

    fn fetch_all(&self) -> Result<Vec<Question>, Self::Error> {
        let json = std::fs::read_to_string(&self.path)
            .map_err(|err| TransportError::io(&self.path, err))?;
        let questions = parse_questions(&json)?;
        tracing::info!(
            path = %self.path.display(),
            questions = questions.len(),
            "questions read from file"
        );
        Ok(questions)
    }
}
