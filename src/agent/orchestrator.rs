//! Analysis orchestrator
//!
//! Sequences tab resolution, content extraction, prompt construction, and
//! the remote analysis call into a single report. Each invocation performs
//! a fresh extraction and remote call; nothing is cached across calls.

use crate::browser::{BrowserExtractor, PageExtractor};
use crate::core::{AnalyzeRequest, AnalyzeResponse, Config, Result};
use crate::llm::{build_prompt, AnalysisClient};
use crate::store::{CredentialStore, TokenFile};

/// Main orchestrator: owns the pipeline collaborators for one session
pub struct Analyzer {
    config: Config,
    extractor: Box<dyn PageExtractor>,
    client: AnalysisClient,
    store: Box<dyn CredentialStore>,
}

impl Analyzer {
    /// Create an analyzer with the default extractor and token store
    pub fn with_config(config: Config) -> Self {
        let extractor = Box::new(BrowserExtractor::from_config(&config));
        let store = Box::new(TokenFile::new());
        Self::new(config, extractor, store)
    }

    /// Create an analyzer with custom collaborators
    pub fn new(
        config: Config,
        extractor: Box<dyn PageExtractor>,
        store: Box<dyn CredentialStore>,
    ) -> Self {
        let client = AnalysisClient::from_config(&config);
        Self {
            config,
            extractor,
            client,
            store,
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one full analysis cycle for a tab.
    ///
    /// The first stage failure aborts the pipeline; there are no partial
    /// reports and no retries.
    pub async fn analyze(&self, tab_id: Option<u32>) -> Result<String> {
        let tab = self.extractor.resolve_tab(tab_id).await?;

        if self.config.app.debug {
            eprintln!("DEBUG: analyzing tab {} ({})", tab.id, tab.url);
        }

        let html = self.extractor.extract(&tab).await?;

        if self.config.app.debug {
            eprintln!("DEBUG: extracted {} bytes of HTML", html.len());
        }

        let prompt = build_prompt(&html);

        // Token is read fresh before every remote call; the client rejects
        // an empty one before any network I/O.
        let token = self.store.get()?.unwrap_or_default();
        self.client.analyze(&prompt, &token).await
    }

    /// Handle one analysis request, producing exactly one response.
    ///
    /// Any stage failure is flattened into a single user-facing string so
    /// callers never need to know which stage failed.
    pub async fn handle(&self, request: AnalyzeRequest) -> AnalyzeResponse {
        match self.analyze(request.tab_id).await {
            Ok(report) => AnalyzeResponse::report(report),
            Err(e) => AnalyzeResponse::error(format!("Analysis Failed: {}", e)),
        }
    }
}
