use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use quiz_types::{Answer, SubmitSink};

use crate::TransportError;

/// Columns of the response log.
pub const HEADER: [&str; 4] = ["timestamp", "company", "email", "response_data"];

/// Answer copied into the `company` column.
pub const COMPANY_QUESTION: &str = "What is your company's name?";

/// Answer copied into the `email` column.
pub const EMAIL_QUESTION: &str = "What is your email address?";

const UNKNOWN: &str = "Unknown";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Appends every submission as one row of a CSV file.
///
/// The header is written when the file is missing or empty. The last column
/// holds the full answer list as compact JSON with UTF-8 kept as is, so the
/// column is not byte-identical to logs written with Python's `json.dumps`
/// defaults. Any JSON reader parses both.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn answer_to<'a>(answers: &'a [Answer], question: &str) -> &'a str {
    answers
        .iter()
        .find(|a| a.question == question)
        .map_or(UNKNOWN, |a| a.answer.as_str())
}

impl SubmitSink for CsvSink {
    type Error = TransportError;

    fn submit(&self, answers: &[Answer]) -> Result<(), Self::Error> {
        if answers.is_empty() {
            return Err(TransportError::NoResponses);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| TransportError::io(&self.path, err))?;
        let needs_header = file
            .metadata()
            .map_err(|err| TransportError::io(&self.path, err))?
            .len()
            == 0;

        let mut writer = csv::Writer::from_writer(file);
        if needs_header {
            writer.write_record(HEADER)?;
        }

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let data = serde_json::to_string(answers)?;
        writer.write_record([
            timestamp.as_str(),
            answer_to(answers, COMPANY_QUESTION),
            answer_to(answers, EMAIL_QUESTION),
            data.as_str(),
        ])?;
        writer
            .flush()
            .map_err(|err| TransportError::io(&self.path, err))?;

        tracing::info!(path = %self.path.display(), answers = answers.len(), "responses logged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_answers_fall_back() {
        let answers = [Answer::new(COMPANY_QUESTION, "Acme")];
        assert_eq!(answer_to(&answers, COMPANY_QUESTION), "Acme");
        assert_eq!(answer_to(&answers, EMAIL_QUESTION), "Unknown");
    }

    #[test]
    fn empty_submission_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join("responses.csv"));
        assert!(matches!(sink.submit(&[]), Err(TransportError::NoResponses)));
        assert!(!sink.path().exists());
    }

    #[test]
    fn response_data_is_compact_utf8_json() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join("responses.csv"));
        sink.submit(&[Answer::new(COMPANY_QUESTION, "Müller GmbH")]).unwrap();

        let mut reader = csv::Reader::from_path(sink.path()).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[1], "Müller GmbH");
        assert_eq!(
            &row[3],
            r#"[{"question":"What is your company's name?","answer":"Müller GmbH"}]"#
        );
    }
}
