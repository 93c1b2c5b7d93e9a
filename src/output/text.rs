//! Human-readable text output formatter

use super::Formatter;
use crate::core::{AnalysisResult, Diagnostic, Severity};

/// Text formatter with optional color support
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn severity_color(&self, severity: Severity) -> &'static str {
        if !self.colored {
            return "";
        }
        match severity {
            Severity::Error => "\x1b[1;31m",   // Bold red
            Severity::Warning => "\x1b[1;33m", // Bold yellow
            Severity::Info => "\x1b[1;36m",    // Bold cyan
        }
    }

    fn reset(&self) -> &'static str {
        if self.colored { "\x1b[0m" } else { "" }
    }

    fn bold(&self) -> &'static str {
        if self.colored { "\x1b[1m" } else { "" }
    }

    fn dim(&self) -> &'static str {
        if self.colored { "\x1b[2m" } else { "" }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, results: &[AnalysisResult]) -> String {
        let mut output = String::new();
        let mut total_errors = 0;
        let mut total_warnings = 0;
        let mut total_info = 0;

        for result in results {
            for diag in &result.diagnostics {
                output.push_str(&self.format_diagnostic(diag));
                output.push('\n');

                match diag.severity {
                    Severity::Error => total_errors += 1,
                    Severity::Warning => total_warnings += 1,
                    Severity::Info => total_info += 1,
                }
            }
        }

        // Summary line
        if total_errors > 0 || total_warnings > 0 || total_info > 0 {
            output.push('\n');
            let mut parts = Vec::new();
            if total_errors > 0 {
                parts.push(format!(
                    "{}{} error{}{}",
                    self.severity_color(Severity::Error),
                    total_errors,
                    if total_errors == 1 { "" } else { "s" },
                    self.reset()
                ));
            }
            if total_warnings > 0 {
                parts.push(format!(
                    "{}{} warning{}{}",
                    self.severity_color(Severity::Warning),
                    total_warnings,
                    if total_warnings == 1 { "" } else { "s" },
                    self.reset()
                ));
            }
            if total_info > 0 {
                parts.push(format!(
                    "{}{} info{}",
                    self.severity_color(Severity::Info),
                    total_info,
                    self.reset()
                ));
            }
            output.push_str(&format!("Found {}\n", parts.join(", ")));
        }

        output
    }

    fn format_diagnostic(&self, diag: &Diagnostic) -> String {
        let mut output = String::new();

        // Location
        output.push_str(&format!(
            "{}{}:{}:{}:{} ",
            self.bold(),
            diag.location.file.display(),
            diag.location.range.start.line,
            diag.location.range.start.character,
            self.reset()
        ));

        // Severity and rule ID
        output.push_str(&format!(
            "{}{}{}[{}]: ",
            self.severity_color(diag.severity),
            diag.severity.as_str(),
            self.reset(),
            diag.rule_id
        ));

        // Message
        output.push_str(&diag.message);

        // Help text
        if let Some(help) = &diag.help {
            output.push_str(&format!("\n  {}help: {}{}", self.dim(), help, self.reset()));
        }

        // Fix suggestions
        for fix in &diag.fixes {
            output.push_str(&format!(
                "\n  {}fix: {}{}",
                self.dim(),
                fix.name,
                self.reset()
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Fix, Location, Position, Range};
    use std::path::PathBuf;

    fn make_location() -> Location {
        Location::new(
            PathBuf::from("Main.kt"),
            Range::new(Position::new(10, 5), Position::new(10, 20)),
        )
    }

    #[test]
    fn test_format_error() {
        let formatter = TextFormatter::new(false);
        let diag = Diagnostic::error(
            "ColorContrast",
            Category::Accessibility,
            "Insufficient color contrast of 3.14:1.",
            make_location(),
        );

        let output = formatter.format_diagnostic(&diag);
        assert!(output.contains("Main.kt:10:5"));
        assert!(output.contains("error"));
        assert!(output.contains("ColorContrast"));
        assert!(output.contains("Insufficient color contrast"));
    }

    #[test]
    fn test_format_with_help() {
        let formatter = TextFormatter::new(false);
        let diag = Diagnostic::warning(
            "HardcodedTextSize",
            Category::Usability,
            "Avoid using hardcoded text sizes.",
            make_location(),
        )
        .with_help("Use theme typography instead");

        let output = formatter.format_diagnostic(&diag);
        assert!(output.contains("help: Use theme typography instead"));
    }

    #[test]
    fn test_format_with_fixes() {
        let formatter = TextFormatter::new(false);
        let range = Range::new(Position::new(1, 1), Position::new(1, 10));
        let diag = Diagnostic::error(
            "NotNullAssertion",
            Category::Correctness,
            "Avoid !!",
            make_location(),
        )
        .with_fix(Fix::new("Replace with requireNotNull()", range, "requireNotNull(x)"))
        .with_fix(Fix::new("Replace with an elvis default", range, " ?: error(\"null value\")"));

        let output = formatter.format_diagnostic(&diag);
        assert!(output.contains("fix: Replace with requireNotNull()"));
        assert!(output.contains("fix: Replace with an elvis default"));
    }

    #[test]
    fn test_summary_counts_and_plurals() {
        let formatter = TextFormatter::new(false);
        let results = vec![AnalysisResult {
            files: Vec::new(),
            diagnostics: vec![
                Diagnostic::error("A", Category::Accessibility, "a", make_location()),
                Diagnostic::error("B", Category::Accessibility, "b", make_location()),
                Diagnostic::warning("C", Category::Usability, "c", make_location()),
            ],
        }];

        let output = formatter.format(&results);
        assert!(output.contains("2 errors"));
        assert!(output.contains("1 warning"));
    }

    #[test]
    fn test_no_diagnostics_no_summary() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format(&[]);
        assert!(output.is_empty());
    }

    #[test]
    fn test_colored_output() {
        let formatter = TextFormatter::new(true);
        let diag = Diagnostic::error("A", Category::Accessibility, "a", make_location());

        let output = formatter.format_diagnostic(&diag);
        assert!(output.contains("\x1b[1;31m"));
        assert!(output.contains("\x1b[0m"));
    }

    #[test]
    fn test_uncolored_output_has_no_escapes() {
        let formatter = TextFormatter::new(false);
        let diag = Diagnostic::warning("A", Category::Usability, "a", make_location());
        assert!(!formatter.format_diagnostic(&diag).contains('\x1b'));
    }
}
