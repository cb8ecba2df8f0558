//! Browser integration - tab discovery and page content extraction
//!
//! Wraps the agent-browser CLI to locate the target tab and run the
//! extraction routine inside the page's own execution context.

pub mod executor;
pub mod tabs;

pub use executor::BrowserExtractor;
pub use tabs::TabList;

use async_trait::async_trait;

use crate::core::{AuditError, Result, TabRef};

/// Seam for page-content extraction
///
/// The default implementation shells out to a browser automation CLI;
/// tests substitute a fixed-page implementation.
#[async_trait]
pub trait PageExtractor: Send + Sync {
    /// Resolve a tab id to a live tab reference. `None` targets the
    /// active tab.
    async fn resolve_tab(&self, tab_id: Option<u32>) -> Result<TabRef>;

    /// Extract the target page's HTML. Prefers the configured container
    /// element, falls back to the whole document.
    async fn extract(&self, tab: &TabRef) -> Result<String>;
}

/// Reject pages the extractor must not touch.
///
/// Only HTTP(S) pages can be analyzed; anything else (chrome://, file://,
/// about:, unparseable URLs) fails before any script injection happens.
pub fn ensure_web_page(page_url: &str) -> Result<()> {
    match url::Url::parse(page_url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(AuditError::UnsupportedPage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_pages_accepted() {
        assert!(ensure_web_page("https://example.com/page").is_ok());
        assert!(ensure_web_page("http://localhost:8080/").is_ok());
    }

    #[test]
    fn test_non_web_pages_rejected() {
        for bad in [
            "chrome://settings",
            "file:///etc/passwd",
            "about:blank",
            "ftp://host/file",
            "not a url",
            "",
        ] {
            let err = ensure_web_page(bad).unwrap_err();
            assert!(
                matches!(err, AuditError::UnsupportedPage),
                "expected UnsupportedPage for {:?}",
                bad
            );
        }
    }
}
