//! JSON output formatter

use super::Formatter;
use crate::core::{AnalysisResult, Diagnostic, Severity};
use serde_json::json;

/// Machine-readable JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, results: &[AnalysisResult]) -> String {
        let mut files = Vec::new();
        let mut diagnostics: Vec<&Diagnostic> = Vec::new();

        for result in results {
            for file in &result.files {
                if !files.contains(file) {
                    files.push(file.clone());
                }
            }
            diagnostics.extend(result.diagnostics.iter());
        }

        let errors = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warnings = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        let info = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Info)
            .count();

        let output = json!({
            "files": files,
            "diagnostics": diagnostics,
            "summary": {
                "errors": errors,
                "warnings": warnings,
                "info": info,
                "total": diagnostics.len(),
            },
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        serde_json::to_string(diagnostic).unwrap_or_else(|_| "{}".to_string())
    }
}
