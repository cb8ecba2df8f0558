//! Report export
//!
//! Formats an analysis report for saving: pretty-printed JSON when the
//! report parses as such, raw text otherwise. The pipeline itself treats
//! the report as an opaque string; this is the only JSON-aware boundary,
//! and a parse failure here degrades the format rather than erroring.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Result;

/// Output format chosen for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
}

impl ReportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Text => "txt",
        }
    }
}

/// A report prepared for saving
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub filename: String,
    pub contents: String,
    pub format: ReportFormat,
}

/// Prepare a report for export.
///
/// A report that looks like JSON and parses losslessly is pretty-printed
/// and saved as `.json`; anything else is preserved byte-for-byte as
/// `.txt`.
pub fn prepare(report: &str, timestamp: DateTime<Utc>) -> ReportFile {
    let trimmed = report.trim();

    let formatted = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        serde_json::from_str::<serde_json::Value>(trimmed)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
    } else {
        None
    };

    let (contents, format) = match formatted {
        Some(pretty) => (pretty, ReportFormat::Json),
        None => (report.to_string(), ReportFormat::Text),
    };

    ReportFile {
        filename: format!(
            "accessibility-report-{}.{}",
            timestamp.format("%Y-%m-%dT%H-%M-%S"),
            format.extension()
        ),
        contents,
        format,
    }
}

/// Write a report into a directory, returning the file's path
pub fn write(report: &str, dir: &Path) -> Result<PathBuf> {
    let file = prepare(report, Utc::now());

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(&file.filename);
    fs::write(&path, &file.contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 22, 9, 30, 15).unwrap()
    }

    #[test]
    fn test_json_report_pretty_printed_losslessly() {
        let report = r#"[{"Rule/Guideline":"WCAG 2.1 1.1.1","Why":"Missing alt","How to fix":"Add alt"}]"#;
        let file = prepare(report, fixed_time());

        assert_eq!(file.format, ReportFormat::Json);
        assert!(file.contents.contains("\n"));

        // parse -> stringify -> parse yields the same structure
        let original: serde_json::Value = serde_json::from_str(report).unwrap();
        let roundtrip: serde_json::Value = serde_json::from_str(&file.contents).unwrap();
        assert_eq!(original, roundtrip);
    }

    #[test]
    fn test_plain_text_preserved_exactly() {
        let report = "plain report\nwith two lines";
        let file = prepare(report, fixed_time());

        assert_eq!(file.format, ReportFormat::Text);
        assert_eq!(file.contents, report);
    }

    #[test]
    fn test_json_lookalike_that_fails_to_parse_stays_text() {
        let report = "[not, valid, json";
        let file = prepare(report, fixed_time());

        assert_eq!(file.format, ReportFormat::Text);
        assert_eq!(file.contents, report);
    }

    #[test]
    fn test_bare_scalars_stay_text() {
        // Only array/object-shaped reports are candidates for JSON export
        for report in ["null", "42", "\"quoted\""] {
            let file = prepare(report, fixed_time());
            assert_eq!(file.format, ReportFormat::Text, "for {:?}", report);
            assert_eq!(file.contents, report);
        }
    }

    #[test]
    fn test_filename_format() {
        let file = prepare("[]", fixed_time());
        assert_eq!(
            file.filename,
            "accessibility-report-2025-04-22T09-30-15.json"
        );

        let file = prepare("plain", fixed_time());
        assert_eq!(file.filename, "accessibility-report-2025-04-22T09-30-15.txt");
    }

    #[test]
    fn test_padded_json_still_detected() {
        let file = prepare("  \n {\"a\": 1} \n", fixed_time());
        assert_eq!(file.format, ReportFormat::Json);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports");

        let path = write("[1, 2]", &target).unwrap();
        assert!(path.exists());
        assert!(path.extension().is_some_and(|e| e == "json"));
    }
}
