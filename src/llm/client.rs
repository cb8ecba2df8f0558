//! Remote analysis client
//!
//! Async HTTP client for the chat-completions endpoint that performs the
//! accessibility analysis. One blocking request/response exchange per
//! report: no retries, no streaming, no timeout beyond the transport's.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{AuditError, ChatMessage, Config, Result};

/// Chat-completions API client
#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client_id: String,
    debug: bool,
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// Response envelope. Only the content path is of interest; everything else
/// the endpoint returns is ignored.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMessage {
    /// Kept as a raw value so a non-string content is reported as malformed
    /// rather than a parse failure elsewhere in the envelope.
    #[serde(default)]
    content: Option<serde_json::Value>,
}

impl AnalysisClient {
    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.api.endpoint.clone(),
            model: config.api.model.clone(),
            temperature: config.analysis.temperature,
            max_tokens: config.analysis.max_tokens,
            client_id: Config::client_id(),
            debug: config.app.debug,
        }
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Debug print if enabled
    fn debug_print(&self, label: &str, content: &str) {
        if self.debug {
            if content.len() > 500 {
                eprintln!("DEBUG {}: {}...", label, &content[..500]);
            } else {
                eprintln!("DEBUG {}: {}", label, content);
            }
        }
    }

    /// Send the analysis prompt and return the model's textual answer.
    ///
    /// Fails with `MissingCredential` before any network I/O when the token
    /// is empty.
    pub async fn analyze(&self, prompt: &str, token: &str) -> Result<String> {
        if token.trim().is_empty() {
            return Err(AuditError::MissingCredential);
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let request_json = serde_json::to_string(&request)?;
        self.debug_print("Request", &request_json);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("token {}", token))
            .header("X-Sourcegraph-Should-Trace", "true")
            .header("X-Requested-With", &self.client_id)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    AuditError::communication(format!(
                        "Cannot reach analysis endpoint at {}: {}",
                        self.endpoint, e
                    ))
                } else {
                    AuditError::from(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort body read; a secondary failure must not mask the
            // status itself.
            let body = response.text().await.unwrap_or_default();
            return Err(AuditError::remote_api(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                body,
            ));
        }

        let response_text = response.text().await?;
        self.debug_print("Response", &response_text);

        Self::extract_content(&response_text)
    }

    /// Pull `choices[0].message.content` out of the envelope.
    fn extract_content(body: &str) -> Result<String> {
        let envelope: ChatResponse = serde_json::from_str(body).map_err(|e| {
            AuditError::MalformedResponse(format!("invalid JSON envelope: {}", e))
        })?;

        envelope
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AuditError::MalformedResponse(
                    "choices[0].message.content missing or not a string".to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> AnalysisClient {
        let mut config = Config::default();
        config.api.endpoint = "http://127.0.0.1:9/llm/chat/completions".to_string();
        AnalysisClient::from_config(&config)
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: "google::v1::gemini-2.0-flash",
            messages: vec![ChatMessage::user("analyze this")],
            temperature: 0.7,
            max_tokens: 8192,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "google::v1::gemini-2.0-flash");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "analyze this");
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(json["max_tokens"], 8192);
    }

    #[test]
    fn test_extract_content_success() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"[{\"Rule/Guideline\":\"WCAG 2.1 1.1.1\"}]"}}]}"#;
        let content = AnalysisClient::extract_content(body).unwrap();
        assert_eq!(content, r#"[{"Rule/Guideline":"WCAG 2.1 1.1.1"}]"#);
    }

    #[test]
    fn test_extract_content_missing_choices() {
        let err = AnalysisClient::extract_content(r#"{"id":"x"}"#).unwrap_err();
        assert!(matches!(err, AuditError::MalformedResponse(_)));
    }

    #[test]
    fn test_extract_content_non_string() {
        let body = r#"{"choices":[{"message":{"content":42}}]}"#;
        let err = AnalysisClient::extract_content(body).unwrap_err();
        assert!(matches!(err, AuditError::MalformedResponse(_)));
    }

    #[test]
    fn test_extract_content_missing_message() {
        let body = r#"{"choices":[{}]}"#;
        let err = AnalysisClient::extract_content(body).unwrap_err();
        assert!(matches!(err, AuditError::MalformedResponse(_)));
    }

    #[test]
    fn test_extract_content_invalid_json() {
        let err = AnalysisClient::extract_content("<html>gateway error</html>").unwrap_err();
        assert!(matches!(err, AuditError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_token_rejected_without_io() {
        // Port 9 (discard) would fail the connection; MissingCredential
        // must win before any attempt is made.
        let client = test_client();
        let err = client.analyze("prompt", "  ").await.unwrap_err();
        assert!(matches!(err, AuditError::MissingCredential));
    }
}
