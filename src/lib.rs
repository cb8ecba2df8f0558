//! a11yscan - AI-Assisted Web Accessibility Auditing
//!
//! Captures the HTML of a live browser tab, sends it to a remote
//! chat-completion endpoint with an accessibility-analysis prompt, and
//! renders or exports the resulting report.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Store**: Persistent API-token storage
//! - **Browser**: Tab discovery and page-content extraction
//! - **LLM**: Prompt construction and the remote analysis client
//! - **Agent**: Pipeline orchestration
//! - **Report**: File export
//! - **CLI**: Command-line interface
//!
//! # Usage
//!
//! ```rust,no_run
//! use a11yscan::core::AnalyzeRequest;
//! use a11yscan::{Analyzer, Config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let analyzer = Analyzer::with_config(Config::load());
//!
//!     let response = analyzer.handle(AnalyzeRequest::active_tab()).await;
//!     println!("{:?}", response);
//! }
//! ```

pub mod agent;
pub mod browser;
pub mod cli;
pub mod core;
pub mod llm;
pub mod report;
pub mod store;

// Re-export commonly used items
pub use agent::Analyzer;
pub use core::{AuditError, Config, Result};
