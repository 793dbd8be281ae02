//! Client for the remote question-answering service.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ClientError;

/// Client for the QA service's `/ask` endpoint.
///
/// All retrieval, ranking, and language-model work happens behind this
/// endpoint; the client only ships the question and the session id.
pub struct QaClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    session_id: &'a str,
}

/// Answer returned by the QA service: the answer text plus the raw
/// citation filenames it is based on.
#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl QaClient {
    /// Create a client for the given QA service base URL.
    ///
    /// `base_url` should be like `https://chat-api.example.run.app` (no
    /// trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ask a question within the given session.
    pub async fn ask(&self, question: &str, session_id: &str) -> Result<Answer, ClientError> {
        let url = format!("{}/ask", self.base_url);

        info!(url = %url, session_id = %session_id, "asking QA service");
        let resp = self
            .client
            .post(&url)
            .json(&AskRequest {
                question,
                session_id,
            })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let answer: Answer = resp.json().await?;
        info!(sources = answer.sources.len(), "answer received");
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_json_with_sources() {
        let json = r#"{
            "answer": "The ordinary VAT rate is 22%.",
            "sources": ["Circolari_2024_12.pdf", "Risposte_2023_n45.pdf"]
        }"#;
        let parsed: Answer = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.answer, "The ordinary VAT rate is 22%.");
        assert_eq!(parsed.sources.len(), 2);
        assert_eq!(parsed.sources[1], "Risposte_2023_n45.pdf");
    }

    #[test]
    fn answer_json_missing_sources_defaults_empty() {
        let json = r#"{"answer": "I don't know."}"#;
        let parsed: Answer = serde_json::from_str(json).unwrap();
        assert!(parsed.sources.is_empty());
    }

    #[test]
    fn ask_request_json_shape() {
        let req = AskRequest {
            question: "What is the VAT rate?",
            session_id: "abc-123",
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["question"], "What is the VAT rate?");
        assert_eq!(json["session_id"], "abc-123");
    }

    #[test]
    fn qa_client_trims_trailing_slash() {
        let client = QaClient::new("https://chat-api.example.run.app/".into());
        assert_eq!(client.base_url, "https://chat-api.example.run.app");
    }
}
