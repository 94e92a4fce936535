//! HTTP client for the word service
//!
//! Endpoints:
//! - `GET  /api/word`      → `{"word": "APPLE"}`
//! - `POST /api/validate`  → `{"valid": true}`
//! - `POST /api/check`     → `{"evaluation": ["correct", ...]}`
//! - `GET  /health`        → `{"status": "healthy"}`
//!
//! Words are sent lowercase; the service answers in either case.

use super::{ApiError, WordService};
use crate::config::ClientConfig;
use crate::game::evaluate::{normalize_word, Evaluation, LetterStatus, WORD_LEN};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Deserialize)]
struct WordResponse {
    word: String,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    valid: bool,
}

#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    guess: &'a str,
    target: &'a str,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    evaluation: Vec<LetterStatus>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Blocking client for the remote word service
pub struct HttpWordService {
    client: Client,
    config: ClientConfig,
}

impl HttpWordService {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Probe `/health`; true when the service reports itself healthy
    pub fn health(&self) -> Result<bool, ApiError> {
        let response: HealthResponse = self.get_json("/health")?;
        Ok(response.status == "healthy")
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let started = Instant::now();
        let response = self.client.get(&url).send()?;
        tracing::debug!(
            url = %url,
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "GET"
        );
        Self::parse(response)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let started = Instant::now();
        let response = self.client.post(&url).json(body).send()?;
        tracing::debug!(
            url = %url,
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "POST"
        );
        Self::parse(response)
    }

    fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

impl WordService for HttpWordService {
    fn fetch_word(&self) -> Result<String, ApiError> {
        let response: WordResponse = self.get_json("/api/word")?;
        let letters = normalize_word(&response.word).map_err(|e| {
            ApiError::Malformed(format!("unusable target {:?}: {}", response.word, e))
        })?;
        Ok(letters.iter().map(|&b| b as char).collect())
    }

    fn validate(&self, word: &str) -> Result<bool, ApiError> {
        let word = word.to_lowercase();
        let response: ValidateResponse =
            self.post_json("/api/validate", &ValidateRequest { word: &word })?;
        Ok(response.valid)
    }

    fn check(&self, guess: &str, target: &str) -> Result<Evaluation, ApiError> {
        let guess = guess.to_lowercase();
        let target = target.to_lowercase();
        let response: CheckResponse = self.post_json(
            "/api/check",
            &CheckRequest {
                guess: &guess,
                target: &target,
            },
        )?;

        let len = response.evaluation.len();
        response.evaluation.try_into().map_err(|_| {
            ApiError::Malformed(format!("expected {} statuses, got {}", WORD_LEN, len))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use super::LetterStatus::{Absent as A, Present as P};

    /// The blocking client must not run on an async worker thread
    async fn with_client<T, F>(server: &MockServer, f: F) -> T
    where
        T: Send + 'static,
        F: FnOnce(HttpWordService) -> T + Send + 'static,
    {
        let config = ClientConfig::default()
            .with_url(server.uri())
            .with_timeout(Duration::from_secs(2));
        tokio::task::spawn_blocking(move || {
            f(HttpWordService::new(config).expect("failed to build client"))
        })
        .await
        .expect("blocking task panicked")
    }

    #[tokio::test]
    async fn test_fetch_word_uppercases() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/word"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"word": "ghost"})))
            .mount(&server)
            .await;

        let word = with_client(&server, |c| c.fetch_word()).await.unwrap();
        assert_eq!(word, "GHOST");
    }

    #[tokio::test]
    async fn test_fetch_word_rejects_bad_length() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/word"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"word": "cat"})))
            .mount(&server)
            .await;

        let result = with_client(&server, |c| c.fetch_word()).await;
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_validate_sends_lowercase() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/validate"))
            .and(body_json(json!({"word": "crane"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": true})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/validate"))
            .and(body_json(json!({"word": "xxxxx"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": false})))
            .mount(&server)
            .await;

        let (crane, junk) =
            with_client(&server, |c| (c.validate("CRANE"), c.validate("XXXXX"))).await;
        assert!(crane.unwrap());
        assert!(!junk.unwrap());
    }

    #[tokio::test]
    async fn test_check_parses_evaluation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/check"))
            .and(body_json(json!({"guess": "speed", "target": "abide"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "evaluation": ["absent", "absent", "present", "absent", "present"]
            })))
            .mount(&server)
            .await;

        let evaluation = with_client(&server, |c| c.check("SPEED", "ABIDE"))
            .await
            .unwrap();
        assert_eq!(evaluation, [A, A, P, A, P]);
    }

    #[tokio::test]
    async fn test_check_bad_request_is_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/check"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Both guess and target must be 5 letters"
            })))
            .mount(&server)
            .await;

        let result = with_client(&server, |c| c.check("CAT", "CRANE")).await;
        match result {
            Err(ApiError::Server { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("5 letters"));
            }
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_wrong_status_count_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/check"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"evaluation": ["correct", "correct"]})),
            )
            .mount(&server)
            .await;

        let result = with_client(&server, |c| c.check("CRANE", "CRANE")).await;
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_unknown_status_string_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/check"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "evaluation": ["green", "correct", "correct", "correct", "correct"]
            })))
            .mount(&server)
            .await;

        let result = with_client(&server, |c| c.check("CRANE", "CRANE")).await;
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
            .mount(&server)
            .await;

        assert!(with_client(&server, |c| c.health()).await.unwrap());
    }

    #[test]
    fn test_unreachable_service() {
        // bind then release a port so nothing is listening on it
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = ClientConfig::default()
            .with_url(format!("http://127.0.0.1:{port}"))
            .with_timeout(Duration::from_millis(500));

        let err = HttpWordService::new(config)
            .unwrap()
            .fetch_word()
            .unwrap_err();
        assert!(err.is_unreachable(), "unexpected error: {err}");
    }
}
