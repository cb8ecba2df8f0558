//! Shared types used across a11yscan modules
//!
//! Contains the target tab reference, the analysis request/response
//! contract, and the chat message structure sent to the remote model.

use serde::{Deserialize, Serialize};

/// Reference to a live browser tab
///
/// Created at request time from tab discovery, used for one analysis cycle,
/// then discarded. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabRef {
    /// Opaque tab identifier assigned by the browser
    pub id: u32,
    /// Current URL of the tab
    pub url: String,
    /// Page title, if the browser reports one
    #[serde(default)]
    pub title: String,
    /// Whether this is the focused tab
    #[serde(default)]
    pub active: bool,
}

impl TabRef {
    /// Create a tab reference from an id and URL
    pub fn new(id: u32, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            title: String::new(),
            active: false,
        }
    }
}

/// A single analysis request
///
/// Wire-compatible with the `{"action": "analyzePage", "tabId": ...}` shape
/// used by UI frontends. `tab_id` of `None` targets the active tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub tab_id: Option<u32>,
}

impl AnalyzeRequest {
    /// Request analysis of a specific tab, or the active tab when `None`
    pub fn new(tab_id: Option<u32>) -> Self {
        Self { tab_id }
    }

    /// Request analysis of the active tab
    pub fn active_tab() -> Self {
        Self { tab_id: None }
    }
}

/// The single response produced for each [`AnalyzeRequest`]
///
/// Exactly one of these is returned per request: either a complete report
/// or a single user-facing error string. Never both, never a partial report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Report { report: String },
    Error { error: String },
}

impl AnalyzeResponse {
    /// Create a report response
    pub fn report(report: impl Into<String>) -> Self {
        Self::Report {
            report: report.into(),
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }

    /// Whether this response carries an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// A message in a chat-completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (user, assistant, system)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request: AnalyzeRequest = serde_json::from_str(r#"{"tabId": 42}"#).unwrap();
        assert_eq!(request.tab_id, Some(42));

        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.tab_id, None);
    }

    #[test]
    fn test_response_wire_shape() {
        let response = AnalyzeResponse::report("[]");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"report":"[]"}"#);

        let response = AnalyzeResponse::error("Analysis Failed: boom");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"Analysis Failed: boom"}"#);
        assert!(response.is_error());
    }

    #[test]
    fn test_chat_message_roles() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "Hello");
    }
}
