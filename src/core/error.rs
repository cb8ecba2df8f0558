//! Custom error types for a11yscan
//!
//! Provides a unified error handling system across all modules. Every stage
//! of the analysis pipeline reports failures through [`AuditError`], and the
//! orchestrator converts them into a single user-facing message.

use thiserror::Error;

/// Main error type for a11yscan operations
#[derive(Error, Debug)]
pub enum AuditError {
    /// Target page does not use an HTTP(S) scheme
    #[error("Cannot analyze non-web pages (e.g., chrome://, file://).")]
    UnsupportedPage,

    /// The browser refused to run the extraction script in the page
    #[error("Cannot access contents of the page at {0}. It might be restricted.")]
    InjectionDenied(String),

    /// The injection layer rejected the tab handle
    #[error("Scripting error: no target specified (tab {0}).")]
    NoTargetSpecified(u32),

    /// Injection succeeded but returned no usable markup
    #[error("Could not retrieve page HTML via script injection.")]
    EmptyExtraction,

    /// Tab discovery found no active web page tab
    #[error("Could not identify the active web page tab.")]
    NoActiveTab,

    /// No open tab matches the requested id
    #[error("No tab found matching ID {0}.")]
    TabNotFound(u32),

    /// Browser automation CLI not installed
    #[error("agent-browser not found. Install with: npm install -g agent-browser && agent-browser install")]
    BrowserCliNotFound,

    /// No API token stored
    #[error("API access token is not configured. Save one with: a11yscan token set <token>")]
    MissingCredential,

    /// Remote endpoint returned a non-success status
    #[error("{}", remote_api_message(.status, .status_text, .body))]
    RemoteApi {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Remote endpoint answered 2xx but the envelope is unusable
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// The request never reached the remote endpoint
    #[error("Communication error: {0}")]
    Communication(String),

    /// Browser automation errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// Credential store errors
    #[error("Credential store error: {0}")]
    Store(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for a11yscan operations
pub type Result<T> = std::result::Result<T, AuditError>;

fn remote_api_message(status: &u16, status_text: &str, body: &str) -> String {
    let mut message = format!("API Error: {} {}", status, status_text);
    if !body.is_empty() {
        message.push_str(" - ");
        message.push_str(body);
    }
    if matches!(*status, 401 | 403) {
        message.push_str(" (Check Token)");
    }
    message
}

impl AuditError {
    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a credential store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a communication error
    pub fn communication(msg: impl Into<String>) -> Self {
        Self::Communication(msg.into())
    }

    /// Create a remote API error from status parts and a best-effort body
    pub fn remote_api(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }
}
