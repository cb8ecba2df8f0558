//! LLM module - prompt construction and the remote analysis client

pub mod client;
pub mod prompt;

pub use client::AnalysisClient;
pub use prompt::build_prompt;
