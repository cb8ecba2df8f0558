//! Credential storage
//!
//! Persists the single API token that authenticates calls to the remote
//! analysis endpoint. The token is written only by the `token set` command,
//! read before every remote call, and never leaves the machine except as an
//! Authorization header.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::core::{AuditError, Config, Result};

/// Key-value contract for the stored API token
pub trait CredentialStore: Send + Sync {
    /// Read the stored token, if any
    fn get(&self) -> Result<Option<String>>;

    /// Store or replace the token
    fn set(&self, token: &str) -> Result<()>;
}

/// On-disk record holding the single token key
#[derive(Debug, Default, Serialize, Deserialize)]
struct TokenRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_token: Option<String>,
}

/// File-backed token store under the config directory
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// Create a store at the default credentials path
    pub fn new() -> Self {
        Self {
            path: Config::credentials_file(),
        }
    }

    /// Create a store backed by a specific file
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for TokenFile {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for TokenFile {
    fn get(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| AuditError::store(format!("Failed to read credentials: {}", e)))?;

        let record: TokenRecord = toml::from_str(&content)
            .map_err(|e| AuditError::store(format!("Failed to parse credentials: {}", e)))?;

        Ok(record.api_token.filter(|t| !t.trim().is_empty()))
    }

    fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AuditError::store(format!("Failed to create credentials dir: {}", e))
                })?;
            }
        }

        let record = TokenRecord {
            api_token: Some(token.to_string()),
        };
        let content = toml::to_string_pretty(&record)
            .map_err(|e| AuditError::store(format!("Failed to serialize credentials: {}", e)))?;

        fs::write(&self.path, content)
            .map_err(|e| AuditError::store(format!("Failed to write credentials: {}", e)))?;

        Ok(())
    }
}

/// In-memory token store for tests and embedding
#[derive(Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .lock()
            .map_err(|_| AuditError::store("Credential store poisoned"))?;
        Ok(guard.clone().filter(|t| !t.trim().is_empty()))
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| AuditError::store("Credential store poisoned"))?;
        *guard = Some(token.to_string());
        Ok(())
    }
}
