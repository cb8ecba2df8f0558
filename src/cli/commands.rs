//! CLI command handlers
//!
//! Plays the UI controller role: triggers analyses, shows status text, and
//! saves the report file.

use std::path::PathBuf;

use crate::agent::Analyzer;
use crate::browser::BrowserExtractor;
use crate::core::{AnalyzeRequest, AnalyzeResponse, AuditError, Config, Result};
use crate::report;
use crate::store::{CredentialStore, TokenFile};

/// Run one analysis of a tab (the active tab when `tab` is `None`)
pub async fn analyze(config: Config, tab: Option<u32>, save: Option<PathBuf>) -> Result<()> {
    let analyzer = Analyzer::with_config(config);

    println!("Requesting analysis... this can take a while.");

    // One request in flight: this call does not return until the pipeline
    // completes or the first stage fails.
    match analyzer.handle(AnalyzeRequest::new(tab)).await {
        AnalyzeResponse::Report { report } => {
            match save {
                Some(dir) => {
                    let path = report::write(&report, &dir)?;
                    println!("Report ready: {}", path.display());
                }
                None => println!("{}", report),
            }
            Ok(())
        }
        AnalyzeResponse::Error { error } => Err(AuditError::Other(error)),
    }
}

/// Save the API token
pub fn token_set(value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuditError::store("Please enter a token value to save."));
    }

    TokenFile::new().set(value)?;
    println!("API token saved successfully!");
    Ok(())
}

/// Show whether a token is stored
pub fn token_status() -> Result<()> {
    match TokenFile::new().get()? {
        Some(_) => println!("API token is set."),
        None => println!("API token not set. Save one with: a11yscan token set <token>"),
    }
    Ok(())
}

/// List open browser tabs
pub async fn tabs(config: Config) -> Result<()> {
    let extractor = BrowserExtractor::from_config(&config);
    let listing = extractor.tabs().await?;

    if listing.is_empty() {
        println!("No open tabs.");
        return Ok(());
    }

    for tab in &listing.tabs {
        let marker = if tab.active { "*" } else { " " };
        if tab.title.is_empty() {
            println!("{} [{}] {}", marker, tab.id, tab.url);
        } else {
            println!("{} [{}] {} - {}", marker, tab.id, tab.title, tab.url);
        }
    }
    Ok(())
}

/// Print the effective configuration
pub fn config_show(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| AuditError::config(format!("Failed to render config: {}", e)))?;

    println!("# {}", Config::config_file().display());
    print!("{}", rendered);
    Ok(())
}

/// Write a default config file
pub fn config_init() -> Result<()> {
    let path = Config::default().save_and_get_path()?;
    println!("Wrote {}", path.display());
    Ok(())
}
