//! Client for the feedback delivery relay.

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::ClientError;

/// Client for the relay's `/send` endpoint.
///
/// The relay owns actual mail delivery; this client only hands over
/// subject, body, and recipient.
pub struct FeedbackClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    subject: &'a str,
    body: &'a str,
    recipient: &'a str,
    /// RFC 3339 submission timestamp.
    sent_at: String,
}

impl FeedbackClient {
    /// Create a client for the given relay base URL (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Forward a feedback message to the relay for delivery.
    pub async fn send(
        &self,
        subject: &str,
        body: &str,
        recipient: &str,
    ) -> Result<(), ClientError> {
        let url = format!("{}/send", self.base_url);

        info!(url = %url, recipient = %recipient, "forwarding feedback");
        let resp = self
            .client
            .post(&url)
            .json(&SendRequest {
                subject,
                body,
                recipient,
                sent_at: Utc::now().to_rfc3339(),
            })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body: text,
            });
        }

        info!("feedback delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_request_json_shape() {
        let req = SendRequest {
            subject: "RAG Feedback - Tax bot",
            body: "User Feedback:\ngreat tool\n\nConversation History:\nUser: hi",
            recipient: "feedback@example.com",
            sent_at: "2026-08-30T10:00:00+00:00".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["subject"], "RAG Feedback - Tax bot");
        assert_eq!(json["recipient"], "feedback@example.com");
        assert!(json["body"].as_str().unwrap().contains("Conversation History"));
        assert_eq!(json["sent_at"], "2026-08-30T10:00:00+00:00");
    }

    #[test]
    fn feedback_client_trims_trailing_slash() {
        let client = FeedbackClient::new("http://localhost:9000/".into());
        assert_eq!(client.base_url, "http://localhost:9000");
    }
}
