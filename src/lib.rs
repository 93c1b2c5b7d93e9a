//! compose-analyzer - Accessibility and correctness analysis for
//! Compose-style UI code
//!
//! This library inspects declarative UI construction code and reports
//! violations a screen-reader user or WCAG audit would hit:
//! - Accessibility: missing content descriptions, small touch targets,
//!   clickable elements without semantics, missing state descriptions
//! - Text style: color contrast against the resolved background, hardcoded
//!   text sizes
//! - Correctness: not-null assertions, redundant double negation
//!
//! # Example
//!
//! ```no_run
//! use compose_analyzer::{Analyzer, Document, SignatureIndex};
//! use compose_analyzer::analyzers::TextStyleAnalyzer;
//! use std::path::Path;
//!
//! let source = r#"Text("hi", color = Color(0xFFBB8383))"#;
//! let doc = Document::parse(source, Path::new("Main.kt"));
//! let mut index = SignatureIndex::new();
//! index.index_document(&doc);
//!
//! let analyzer = TextStyleAnalyzer::new();
//! let result = analyzer.analyze(&doc, &index);
//!
//! for diag in result.diagnostics {
//!     println!("{}: {}", diag.rule_id, diag.message);
//! }
//! ```

pub mod analyzers;
pub mod config;
pub mod core;
pub mod output;

// Re-export main types
pub use crate::analyzers::Analyzer;
pub use crate::config::Config;
pub use crate::core::{
    AnalysisResult, Category, Color, Diagnostic, Dimension, Document, Fix, Location, NodeId,
    Position, Range, Severity, SignatureIndex, SuppressionContext,
};
pub use crate::output::{get_formatter, Formatter, OutputFormat};

use std::path::Path;

/// Run all enabled analyzers on a document
pub fn analyze(doc: &Document, index: &SignatureIndex, config: &Config) -> AnalysisResult {
    analyze_with_source(doc, index, config, None)
}

/// Run all enabled analyzers on a document with optional source for
/// suppression parsing
pub fn analyze_with_source(
    doc: &Document,
    index: &SignatureIndex,
    config: &Config,
    source: Option<&str>,
) -> AnalysisResult {
    use analyzers::*;

    let mut result = AnalysisResult::new();

    if config.analyzers.accessibility {
        let analyzer = AccessibilityAnalyzer::new();
        result.merge(analyzer.analyze(doc, index));
    }

    if config.analyzers.text_style {
        let analyzer = TextStyleAnalyzer::new();
        result.merge(analyzer.analyze(doc, index));
    }

    if config.analyzers.correctness {
        let analyzer = CorrectnessAnalyzer::new();
        result.merge(analyzer.analyze(doc, index));
    }

    // Filter by enabled rules
    result
        .diagnostics
        .retain(|d| config.is_rule_enabled(&d.rule_id));

    // Apply configured severity overrides
    for diag in &mut result.diagnostics {
        if let Some(severity) = config
            .get_severity_override(&diag.rule_id)
            .and_then(|s| s.parse::<Severity>().ok())
        {
            diag.severity = severity;
        }
    }

    // Filter by minimum severity
    result.diagnostics.retain(|d| match config.min_severity {
        config::MinSeverity::Error => d.severity >= Severity::Error,
        config::MinSeverity::Warning => d.severity >= Severity::Warning,
        config::MinSeverity::Info => true,
    });

    // Apply inline suppressions if source is provided
    if let Some(src) = source {
        let suppression_ctx = SuppressionContext::parse(src);
        if suppression_ctx.has_suppressions() {
            result.diagnostics.retain(|d| {
                !suppression_ctx.is_suppressed(&d.rule_id, d.location.range.start.line)
            });
        }
    }

    result
}

/// Analyze multiple files with cross-file signature resolution
pub fn analyze_project(files: &[&Path], config: &Config) -> Result<Vec<AnalysisResult>, String> {
    // Build the cross-file signature index first
    let mut index = SignatureIndex::new();
    let mut documents = Vec::new();

    for file in files {
        if config.is_excluded(file) {
            continue;
        }

        let source = std::fs::read_to_string(file)
            .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;

        let doc = Document::parse(&source, file);
        index.index_document(&doc);
        documents.push((doc, source));
    }

    let mut results = Vec::new();

    for (doc, source) in &documents {
        let result = analyze_with_source(doc, &index, config, Some(source));
        if !result.diagnostics.is_empty() {
            results.push(result);
        }
    }

    Ok(results)
}

/// Analyze multiple files in parallel with cross-file signature resolution
///
/// Uses rayon for per-file parallelism; index building stays sequential so
/// the signature set every file sees is identical.
pub fn analyze_project_parallel(
    files: &[&Path],
    config: &Config,
) -> Result<Vec<AnalysisResult>, String> {
    use rayon::prelude::*;
    use std::sync::Arc;

    let mut index = SignatureIndex::new();
    let mut documents = Vec::new();

    for file in files {
        if config.is_excluded(file) {
            continue;
        }

        let source = std::fs::read_to_string(file)
            .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;

        let doc = Document::parse(&source, file);
        index.index_document(&doc);
        documents.push((doc, source));
    }

    let index = Arc::new(index);

    let results: Vec<AnalysisResult> = documents
        .par_iter()
        .map(|(doc, source)| analyze_with_source(doc, &index, config, Some(source)))
        .collect();

    Ok(results
        .into_iter()
        .filter(|r| !r.diagnostics.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn parse(source: &str) -> (Document, SignatureIndex) {
        let doc = Document::parse(source, Path::new("Main.kt"));
        let mut index = SignatureIndex::new();
        index.index_document(&doc);
        (doc, index)
    }

    const LOW_CONTRAST: &str = r#"
        Box(modifier = Modifier.fillMaxSize().background(Color.White)) {
            Text(
                text = "Can you read this?",
                color = Color(0xFFBB8383)
            )
        }
    "#;

    #[test]
    fn test_analyze_reports_contrast_and_raw_text() {
        let (doc, index) = parse(LOW_CONTRAST);
        let config = Config::default();

        let result = analyze(&doc, &index, &config);
        assert!(result.diagnostics.iter().any(|d| d.rule_id == "ColorContrast"));
        assert!(result.diagnostics.iter().any(|d| d.rule_id == "RawTextUsage"));
    }

    #[test]
    fn test_analyzer_filtering() {
        let (doc, index) = parse(LOW_CONTRAST);

        let mut config = Config::default();
        config.analyzers.text_style = false;

        let result = analyze(&doc, &index, &config);
        assert!(result.diagnostics.iter().all(|d| d.rule_id != "ColorContrast"));
    }

    #[test]
    fn test_rule_filtering() {
        let (doc, index) = parse(LOW_CONTRAST);

        let mut config = Config::default();
        config.rules.disable.push("Raw*".to_string());

        let result = analyze(&doc, &index, &config);
        assert!(result.diagnostics.iter().all(|d| !d.rule_id.starts_with("Raw")));
        assert!(result.diagnostics.iter().any(|d| d.rule_id == "ColorContrast"));
    }

    #[test]
    fn test_severity_filter() {
        let (doc, index) = parse(r#"Text("hi", fontSize = 16.sp)"#);

        let mut config = Config::default();
        config.min_severity = config::MinSeverity::Error;

        let result = analyze(&doc, &index, &config);
        // HardcodedTextSize is a warning and must be filtered out
        assert!(result.diagnostics.iter().all(|d| d.severity >= Severity::Error));
        assert!(result.diagnostics.iter().all(|d| d.rule_id != "HardcodedTextSize"));
    }

    #[test]
    fn test_severity_override() {
        let (doc, index) = parse(r#"Text("hi", fontSize = 16.sp)"#);

        let mut config = Config::default();
        config
            .rules
            .severity
            .insert("HardcodedTextSize".to_string(), "error".to_string());

        let result = analyze(&doc, &index, &config);
        let diag = result
            .diagnostics
            .iter()
            .find(|d| d.rule_id == "HardcodedTextSize")
            .unwrap();
        assert_eq!(diag.severity, Severity::Error);
    }

    #[test]
    fn test_inline_suppression() {
        let source = "// compose-analyzer-disable-next-line RawTextUsage\nText(\"raw\")\n";
        let (doc, index) = parse(source);
        let config = Config::default();

        let result = analyze_with_source(&doc, &index, &config, Some(source));
        assert!(result.diagnostics.iter().all(|d| d.rule_id != "RawTextUsage"));
    }

    #[test]
    fn test_analyze_project_cross_file_signatures() {
        let temp_dir = TempDir::new().unwrap();

        // Greeting is declared in one file and called positionally from
        // another; the index makes the call resolve.
        let decl = temp_dir.path().join("Greeting.kt");
        {
            let mut f = File::create(&decl).unwrap();
            writeln!(
                f,
                "fun Greeting(name: String, modifier: Modifier = Modifier) {{\n    Text(text = name)\n}}"
            )
            .unwrap();
        }

        let usage = temp_dir.path().join("Screen.kt");
        {
            let mut f = File::create(&usage).unwrap();
            writeln!(f, "Greeting(\"Android\")").unwrap();
        }

        let files: Vec<&Path> = vec![decl.as_path(), usage.as_path()];
        let config = Config::default();

        let results = analyze_project(&files, &config).unwrap();
        // The raw Text in Greeting.kt is still flagged
        assert!(results
            .iter()
            .flat_map(|r| &r.diagnostics)
            .any(|d| d.rule_id == "RawTextUsage"));
    }

    #[test]
    fn test_analyze_project_with_exclusion() {
        let temp_dir = TempDir::new().unwrap();

        let file1 = temp_dir.path().join("Main.kt");
        {
            let mut f = File::create(&file1).unwrap();
            writeln!(f, "Text(\"raw\")").unwrap();
        }

        let file2 = temp_dir.path().join("Excluded.generated.kt");
        {
            let mut f = File::create(&file2).unwrap();
            writeln!(f, "Text(\"raw\")").unwrap();
        }

        let files: Vec<&Path> = vec![file1.as_path(), file2.as_path()];
        let mut config = Config::default();
        config.exclude.push("*.generated.kt".to_string());

        let results = analyze_project(&files, &config).unwrap();
        for result in &results {
            for file in &result.files {
                assert!(!file.to_string_lossy().contains("generated"));
            }
        }
    }

    #[test]
    fn test_analyze_project_file_not_found() {
        let files: Vec<&Path> = vec![Path::new("/nonexistent/Main.kt")];
        let config = Config::default();

        let result = analyze_project(&files, &config);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to read"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let temp_dir = TempDir::new().unwrap();

        for (name, body) in [
            ("A.kt", "Text(\"one\")\n"),
            ("B.kt", "val v = user!!.name\n"),
            ("C.kt", "Image(painterResource(1))\n"),
        ] {
            let mut f = File::create(temp_dir.path().join(name)).unwrap();
            f.write_all(body.as_bytes()).unwrap();
        }

        let paths: Vec<_> = ["A.kt", "B.kt", "C.kt"]
            .iter()
            .map(|n| temp_dir.path().join(n))
            .collect();
        let files: Vec<&Path> = paths.iter().map(|p| p.as_path()).collect();
        let config = Config::default();

        let sequential = analyze_project(&files, &config).unwrap();
        let parallel = analyze_project_parallel(&files, &config).unwrap();

        let count = |results: &[AnalysisResult]| -> usize {
            results.iter().map(|r| r.diagnostics.len()).sum()
        };
        assert_eq!(count(&sequential), count(&parallel));
    }

    #[test]
    fn test_all_analyzers_disabled() {
        let (doc, index) = parse(LOW_CONTRAST);

        let mut config = Config::default();
        config.analyzers.accessibility = false;
        config.analyzers.text_style = false;
        config.analyzers.correctness = false;

        let result = analyze(&doc, &index, &config);
        assert!(result.diagnostics.is_empty());
    }
}
