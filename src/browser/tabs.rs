//! Tab listing parsing for agent-browser output
//!
//! Parses the tab inventory JSON from agent-browser.

use serde::{Deserialize, Serialize};

use crate::core::{AuditError, Result, TabRef};

/// Parsed tab listing from agent-browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabList {
    /// Whether the operation succeeded
    #[serde(default)]
    pub success: bool,
    /// Open tabs
    #[serde(default)]
    pub tabs: Vec<TabRef>,
}

impl TabList {
    /// Parse the CLI's JSON output
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| AuditError::browser(format!("Failed to parse tab listing: {}", e)))
    }

    /// Number of open tabs
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether there are no open tabs
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// The focused tab, if any
    pub fn active(&self) -> Option<&TabRef> {
        self.tabs.iter().find(|t| t.active)
    }

    /// Look up a tab by id
    pub fn find(&self, id: u32) -> Option<&TabRef> {
        self.tabs.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "success": true,
        "tabs": [
            {"id": 1, "url": "https://example.com/", "title": "Example", "active": false},
            {"id": 2, "url": "https://example.org/page", "title": "Page", "active": true}
        ]
    }"#;

    #[test]
    fn test_parse_listing() {
        let list = TabList::parse(LISTING).unwrap();
        assert!(list.success);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_active_tab() {
        let list = TabList::parse(LISTING).unwrap();
        let active = list.active().unwrap();
        assert_eq!(active.id, 2);
        assert_eq!(active.url, "https://example.org/page");
    }

    #[test]
    fn test_find_by_id() {
        let list = TabList::parse(LISTING).unwrap();
        assert_eq!(list.find(1).unwrap().title, "Example");
        assert!(list.find(99).is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(TabList::parse("not json").is_err());
    }

    #[test]
    fn test_missing_fields_default() {
        let list = TabList::parse(r#"{"tabs": [{"id": 7, "url": "https://a.b/"}]}"#).unwrap();
        assert!(!list.success);
        let tab = list.find(7).unwrap();
        assert_eq!(tab.title, "");
        assert!(!tab.active);
        assert!(list.active().is_none());
    }
}
