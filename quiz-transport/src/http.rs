//! Blocking client for the questionnaire backend.
//!
//! The backend exposes `GET {base}/questions`, returning the flat question
//! list, and `POST {base}/submit`, accepting `{"responses": [...]}`.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use quiz_types::{Answer, Question, QuestionSource, SubmitSink};

use crate::TransportError;

/// Request timeout used by `HttpSource::new` and `HttpSink::new`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
struct Backend {
    client: Client,
    base: String,
}

impl Backend {
    fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base_url.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.trim_end_matches('/'), path)
    }
}

fn check_status(
    url: String,
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TransportError::Status { url, status })
    }
}

/// Fetches the question catalog from the backend.
#[derive(Debug, Clone)]
pub struct HttpSource {
    backend: Backend,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            backend: Backend::new(base_url, timeout)?,
        })
    }

    /// The URL questions are fetched from.
    pub fn url(&self) -> String {
        self.backend.endpoint("questions")
    }
}

impl QuestionSource for HttpSource {
    type Error = TransportError;

    fn fetch_all(&self) -> Result<Vec<Question>, Self::Error> {
        let url = self.url();
        tracing::debug!(%url, "fetching questions");

        let response = self.backend.client.get(&url).send()?;
        let questions: Vec<Question> = check_status(url, response)?.json()?;

        tracing::info!(questions = questions.len(), "questions fetched");
        Ok(questions)
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    responses: &'a [Answer],
}

/// Posts the collected answers to the backend.
#[derive(Debug, Clone)]
pub struct HttpSink {
    backend: Backend,
}

impl HttpSink {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            backend: Backend::new(base_url, timeout)?,
        })
    }

    /// The URL answers are posted to.
    pub fn url(&self) -> String {
        self.backend.endpoint("submit")
    }
}

impl SubmitSink for HttpSink {
    type Error = TransportError;

    fn submit(&self, answers: &[Answer]) -> Result<(), Self::Error> {
        let url = self.url();
        tracing::debug!(%url, answers = answers.len(), "posting responses");

        let response = self
            .backend
            .client
            .post(&url)
            .json(&Payload { responses: answers })
            .send()?;
        check_status(url, response)?;

        tracing::info!(answers = answers.len(), "responses accepted by server");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quiz_types::QuestionKind;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    // The blocking client must not run on the runtime's worker threads.
    async fn fetch(base: String) -> Result<Vec<Question>, TransportError> {
        tokio::task::spawn_blocking(move || HttpSource::new(base)?.fetch_all())
            .await
            .unwrap()
    }

    async fn post(base: String, answers: Vec<Answer>) -> Result<(), TransportError> {
        tokio::task::spawn_blocking(move || HttpSink::new(base)?.submit(&answers))
            .await
            .unwrap()
    }

    #[test]
    fn endpoints_join_cleanly() {
        let source = HttpSource::new("http://localhost:5000/").unwrap();
        assert_eq!(source.url(), "http://localhost:5000/questions");
        let sink = HttpSink::new("http://localhost:5000").unwrap();
        assert_eq!(sink.url(), "http://localhost:5000/submit");
    }

    #[tokio::test]
    async fn fetches_flat_question_list() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/questions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"text": "Name?", "type": "text", "options": [], "category": "common"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let questions = fetch(mock_server.uri()).await.unwrap();
        assert_eq!(questions, vec![Question::common("Name?", QuestionKind::Text)]);
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/questions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
            .mount(&mock_server)
            .await;

        let err = fetch(mock_server.uri()).await.unwrap_err();
        let TransportError::Status { status, url } = err else {
            panic!("expected a status error");
        };
        assert_eq!(status.as_u16(), 500);
        assert!(url.ends_with("/questions"));
    }

    #[tokio::test]
    async fn posts_responses_envelope() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(body_json(json!({
                "responses": [
                    {"question": "Name?", "answer": "Alice"},
                    {"question": "gdpr", "answer": ""}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let answers = vec![Answer::new("Name?", "Alice"), Answer::new("gdpr", "")];
        post(mock_server.uri(), answers).await.unwrap();
    }

    #[tokio::test]
    async fn rejected_submission_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "No responses received"})),
            )
            .mount(&mock_server)
            .await;

        let err = post(mock_server.uri(), Vec::new()).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status, .. } if status.as_u16() == 400));
    }
}
