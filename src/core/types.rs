//! Core types for Compose analysis

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Position in a file (1-based for editor compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Range in a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create range from byte offsets in source
    pub fn from_offsets(source: &str, start: usize, end: usize) -> Self {
        let start_pos = offset_to_position(source, start);
        let end_pos = offset_to_position(source, end);
        Self::new(start_pos, end_pos)
    }
}

/// Convert byte offset to Position
fn offset_to_position(source: &str, offset: usize) -> Position {
    let mut line = 1;
    let mut character = 1;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            character = 1;
        } else {
            character += 1;
        }
    }

    Position::new(line, character)
}

/// Location in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: PathBuf,
    pub range: Range,
}

impl Location {
    pub fn new(file: PathBuf, range: Range) -> Self {
        Self { file, range }
    }
}

/// Diagnostic severity, ordered from lowest to highest priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory, suggestion only
    Info = 1,
    /// Should fix, does not block
    Warning = 2,
    /// Accessibility or correctness violation, must fix
    Error = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// Issue category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Screen-reader and WCAG violations
    Accessibility,
    /// Usability problems short of a hard WCAG failure
    Usability,
    /// Expressions that are unsafe or redundant
    Correctness,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Accessibility => "accessibility",
            Category::Usability => "usability",
            Category::Correctness => "correctness",
        }
    }
}

/// A suggested textual fix: replace `range` with `replacement`.
///
/// The replacement must be self-consistent when substituted verbatim over
/// the stated range; the engine constructs fixes but never applies or
/// validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub name: String,
    pub range: Range,
    pub replacement: String,
}

impl Fix {
    pub fn new(name: impl Into<String>, range: Range, replacement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range,
            replacement: replacement.into(),
        }
    }
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable rule identifier (e.g. "ColorContrast", "RawButtonUsage")
    pub rule_id: String,
    /// Issue category
    pub category: Category,
    /// Severity level
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Location in source
    pub location: Location,
    /// Help text explaining how to fix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Suggested fixes, ordered alternatives
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    pub fn new(
        rule_id: impl Into<String>,
        category: Category,
        severity: Severity,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            category,
            severity,
            message: message.into(),
            location,
            help: None,
            fixes: Vec::new(),
        }
    }

    pub fn error(
        rule_id: impl Into<String>,
        category: Category,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(rule_id, category, Severity::Error, message, location)
    }

    pub fn warning(
        rule_id: impl Into<String>,
        category: Category,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(rule_id, category, Severity::Warning, message, location)
    }

    pub fn info(
        rule_id: impl Into<String>,
        category: Category,
        message: impl Into<String>,
        location: Location,
    ) -> Self {
        Self::new(rule_id, category, Severity::Info, message, location)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }
}

/// Result of analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub files: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file: PathBuf) {
        if !self.files.contains(&file) {
            self.files.push(file);
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: AnalysisResult) {
        for file in other.files {
            self.add_file(file);
        }
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Info)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_location() -> Location {
        Location::new(
            PathBuf::from("test.kt"),
            Range::new(Position::new(3, 5), Position::new(3, 20)),
        )
    }

    #[test]
    fn test_range_from_offsets() {
        let source = "Text(\n    color = Color.Red\n)";
        let range = Range::from_offsets(source, 6, 10);
        assert_eq!(range.start, Position::new(2, 1));
        assert_eq!(range.end, Position::new(2, 5));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert!("blocker".parse::<Severity>().is_err());
    }

    #[test]
    fn test_diagnostic_builder() {
        let diag = Diagnostic::error(
            "RawButtonUsage",
            Category::Usability,
            "Use AccessibleButton",
            make_location(),
        )
        .with_help("Raw Button does not guarantee accessibility")
        .with_fix(Fix::new(
            "Replace with AccessibleButton",
            Range::new(Position::new(3, 5), Position::new(3, 11)),
            "AccessibleButton",
        ));

        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.help.is_some());
        assert_eq!(diag.fixes.len(), 1);
    }

    #[test]
    fn test_result_counts() {
        let mut result = AnalysisResult::new();
        result.add(Diagnostic::error("E", Category::Accessibility, "e", make_location()));
        result.add(Diagnostic::warning("W", Category::Usability, "w", make_location()));
        result.add(Diagnostic::warning("W2", Category::Usability, "w", make_location()));

        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 2);
        assert_eq!(result.info_count(), 0);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_result_merge_dedups_files() {
        let mut a = AnalysisResult::new();
        a.add_file(PathBuf::from("x.kt"));
        let mut b = AnalysisResult::new();
        b.add_file(PathBuf::from("x.kt"));
        b.add(Diagnostic::info("I", Category::Usability, "i", make_location()));

        a.merge(b);
        assert_eq!(a.files.len(), 1);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_diagnostic_serialization_skips_empty() {
        let diag = Diagnostic::error("E", Category::Correctness, "msg", make_location());
        let json = serde_json::to_string(&diag).unwrap();
        assert!(!json.contains("fixes"));
        assert!(!json.contains("help"));
        assert!(json.contains("\"severity\":\"error\""));
    }
}
