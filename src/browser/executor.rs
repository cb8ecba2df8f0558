//! Browser executor - wraps agent-browser CLI
//!
//! Provides the page-content extraction path: tab discovery via
//! `tabs --json` and in-page script evaluation via `eval`.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::browser::tabs::TabList;
use crate::browser::{ensure_web_page, PageExtractor};
use crate::core::{AuditError, Config, Result, TabRef};

/// Page extractor backed by the agent-browser CLI
pub struct BrowserExtractor {
    /// Session name for isolation
    session_name: String,
    /// DOM element id preferred over the whole document
    container_id: String,
    debug: bool,
}

impl BrowserExtractor {
    /// Create a new extractor
    pub fn new(session_name: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            session_name: session_name.into(),
            container_id: container_id.into(),
            debug: false,
        }
    }

    /// Create an extractor from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            session_name: config.browser.session_name.clone(),
            container_id: config.analysis.container_id.clone(),
            debug: config.app.debug,
        }
    }

    /// Check if agent-browser is installed
    pub async fn is_available() -> bool {
        Command::new("agent-browser")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// The routine run inside the target page.
    ///
    /// Looks up the configured container element and returns its serialized
    /// markup; returns the whole document's markup when the container is
    /// absent, so extraction never comes back empty on a normal page.
    fn extraction_script(&self) -> String {
        format!(
            "(() => {{ const el = document.getElementById({id:?}); \
             return el ? el.outerHTML : document.documentElement.outerHTML; }})()",
            id = self.container_id
        )
    }

    /// Run an agent-browser command
    async fn run_command(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("agent-browser");
        cmd.args(["--session", &self.session_name]);
        cmd.args(args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AuditError::BrowserCliNotFound
            } else {
                AuditError::browser(format!("Failed to run agent-browser: {}", e))
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(AuditError::browser(format!(
                "agent-browser command failed: {}",
                stderr
            )))
        }
    }

    /// List open tabs
    pub async fn tabs(&self) -> Result<TabList> {
        let output = self.run_command(&["tabs", "--json"]).await?;
        TabList::parse(&output)
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

    /// Map an eval failure to the extraction taxonomy
    fn map_eval_error(&self, err: AuditError, tab: &TabRef) -> AuditError {
        let message = err.to_string();
        if message.contains("Cannot access") {
            AuditError::InjectionDenied(tab.url.clone())
        } else if message.contains("No target") || message.contains("no such tab") {
            AuditError::NoTargetSpecified(tab.id)
        } else {
            err
        }
    }
}

#[async_trait]
impl PageExtractor for BrowserExtractor {
    async fn resolve_tab(&self, tab_id: Option<u32>) -> Result<TabRef> {
        let listing = self.tabs().await?;

        match tab_id {
            Some(id) => listing
                .find(id)
                .cloned()
                .ok_or(AuditError::TabNotFound(id)),
            None => listing.active().cloned().ok_or(AuditError::NoActiveTab),
        }
    }

    async fn extract(&self, tab: &TabRef) -> Result<String> {
        // Never inject into restricted schemes
        ensure_web_page(&tab.url)?;

        let script = self.extraction_script();
        self.debug_print("Eval", &script);

        let tab_arg = tab.id.to_string();
        let html = self
            .run_command(&["eval", "--tab", &tab_arg, &script])
            .await
            .map_err(|e| self.map_eval_error(e, tab))?;

        let html = html.trim();
        if html.is_empty() {
            return Err(AuditError::EmptyExtraction);
        }

        self.debug_print("Extracted", html);
        Ok(html.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_script_prefers_container() {
        let extractor = BrowserExtractor::new("test", "ctl00_masterPageBody");
        let script = extractor.extraction_script();
        assert!(script.contains("getElementById(\"ctl00_masterPageBody\")"));
        assert!(script.contains("el.outerHTML"));
        assert!(script.contains("document.documentElement.outerHTML"));
    }

    #[test]
    fn test_extraction_script_container_is_configurable() {
        let extractor = BrowserExtractor::new("test", "main-content");
        assert!(extractor
            .extraction_script()
            .contains("getElementById(\"main-content\")"));
    }

    #[test]
    fn test_eval_error_mapping() {
        let extractor = BrowserExtractor::new("test", "main");
        let tab = TabRef::new(5, "https://example.com/");

        let denied = extractor.map_eval_error(
            AuditError::browser("agent-browser command failed: Cannot access contents of url"),
            &tab,
        );
        assert!(matches!(denied, AuditError::InjectionDenied(url) if url == tab.url));

        let no_target = extractor.map_eval_error(
            AuditError::browser("agent-browser command failed: No target specified"),
            &tab,
        );
        assert!(matches!(no_target, AuditError::NoTargetSpecified(5)));

        let other = extractor.map_eval_error(AuditError::browser("something else"), &tab);
        assert!(matches!(other, AuditError::Browser(_)));
    }
}
