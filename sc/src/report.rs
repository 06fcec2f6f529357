//! Validation report accumulated over one pass

use colored::*;
use serde::Serialize;
use std::fmt::Write;

/// Errors and warnings found in one validation pass, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    collection_count: usize,
    error_count: usize,
    warning_count: usize,
    success: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationReport {
    pub(crate) fn new(collection_count: usize) -> Self {
        Self {
            collection_count,
            success: true,
            ..Default::default()
        }
    }

    pub(crate) fn error(&mut self, message: String) {
        log::debug!("error: {}", message);
        self.errors.push(message);
        self.error_count = self.errors.len();
        self.success = false;
    }

    pub(crate) fn warning(&mut self, message: String) {
        log::debug!("warning: {}", message);
        self.warnings.push(message);
        self.warning_count = self.warnings.len();
    }

    /// Number of collections that were checked
    pub fn collection_count(&self) -> usize {
        self.collection_count
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// True when no errors were found; warnings never affect success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Render the results section: counts, then errors, then warnings, then the verdict
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", "=== Validation Results ===".bold());
        let _ = writeln!(out, "Collections validated: {}", self.collection_count);
        let _ = writeln!(out, "Errors: {}", self.error_count);
        let _ = writeln!(out, "Warnings: {}", self.warning_count);

        if !self.errors.is_empty() {
            let _ = writeln!(out, "\n{}", "ERRORS:".red().bold());
            for error in &self.errors {
                let _ = writeln!(out, "  - {}", error);
            }
        }

        if !self.warnings.is_empty() {
            let _ = writeln!(out, "\n{}", "WARNINGS:".yellow().bold());
            for warning in &self.warnings {
                let _ = writeln!(out, "  - {}", warning);
            }
        }

        if self.success {
            let _ = writeln!(out, "\n{} Schema validation passed!", "✓".green());
        } else {
            let _ = writeln!(
                out,
                "\n{} Schema validation failed! Please fix the errors above.",
                "✗".red()
            );
        }

        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(report: &ValidationReport) -> String {
        colored::control::set_override(false);
        report.render_text()
    }

    #[test]
    fn test_counts_track_messages() {
        let mut report = ValidationReport::new(2);
        assert!(report.is_success());

        report.warning("w1".to_string());
        assert!(report.is_success());
        assert_eq!(report.warning_count(), 1);

        report.error("e1".to_string());
        report.error("e2".to_string());
        assert!(!report.is_success());
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.errors(), ["e1", "e2"]);
        assert_eq!(report.collection_count(), 2);
    }

    #[test]
    fn test_render_text_order() {
        let mut report = ValidationReport::new(1);
        report.warning("Notifications collection: Missing sender relation field".to_string());
        report.error("Collection 0: Missing id".to_string());

        let text = plain(&report);
        let counts = text.find("Errors: 1").unwrap();
        let errors = text.find("ERRORS:").unwrap();
        let warnings = text.find("WARNINGS:").unwrap();
        assert!(counts < errors);
        assert!(errors < warnings);
        assert!(text.contains("  - Collection 0: Missing id"));
        assert!(text.contains("Schema validation failed!"));
    }

    #[test]
    fn test_render_text_omits_empty_sections() {
        let text = plain(&ValidationReport::new(0));
        assert!(!text.contains("ERRORS:"));
        assert!(!text.contains("WARNINGS:"));
        assert!(text.contains("Schema validation passed!"));
    }

    #[test]
    fn test_json_shape() {
        let mut report = ValidationReport::new(1);
        report.error("Collection 0: Missing id".to_string());

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["collectionCount"], 1);
        assert_eq!(value["errorCount"], 1);
        assert_eq!(value["warningCount"], 0);
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0], "Collection 0: Missing id");
    }
}
