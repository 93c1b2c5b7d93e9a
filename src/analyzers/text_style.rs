//! Text style analyzer
//!
//! Checks on text rendering calls: WCAG color contrast against the
//! effective background, and hardcoded text sizes that bypass the theme.

use super::Analyzer;
use crate::core::contrast::{contrast_ratio, is_large_text, required_ratio};
use crate::core::extractor::{extract_color, extract_font_size, is_literal_rooted};
use crate::core::resolve::find_argument;
use crate::core::walker::effective_background;
use crate::core::{AnalysisResult, Category, Diagnostic, Document, NodeId, SignatureIndex};

/// Default body text size when no fontSize is passed, in sp
const DEFAULT_FONT_SIZE_SP: f64 = 14.0;

/// Calls that render text with a `color`/`fontSize` surface
const TEXT_COMPONENTS: &[&str] = &["Text", "AccessibleText"];

pub struct TextStyleAnalyzer;

impl TextStyleAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Text color against the resolved background, per WCAG 2.1 AA.
    ///
    /// Only fires when both colors resolve to concrete values; a theme
    /// color on either side is unknowable statically and stays silent.
    fn check_color_contrast(
        &self,
        result: &mut AnalysisResult,
        doc: &Document,
        index: &SignatureIndex,
        call: NodeId,
    ) {
        let Some(color_arg) = find_argument(doc, index, call, "color") else {
            return;
        };
        let Some(foreground) = extract_color(doc, color_arg) else {
            return;
        };
        let Some(background) = effective_background(doc, index, call) else {
            return;
        };

        let font_size = find_argument(doc, index, call, "fontSize")
            .and_then(|arg| extract_font_size(doc, arg))
            .unwrap_or(DEFAULT_FONT_SIZE_SP);
        let large = is_large_text(font_size);
        let required = required_ratio(large);

        let ratio = contrast_ratio(foreground, background);
        if ratio >= required {
            return;
        }

        result.add(Diagnostic::error(
            "ColorContrast",
            Category::Accessibility,
            format!(
                "Insufficient color contrast of {:.2}:1. WCAG requires at least {:.1}:1 for {} text.",
                ratio,
                required,
                if large { "large" } else { "normal" }
            ),
            doc.location(call),
        ));
    }

    /// Literal font sizes instead of theme typography
    fn check_hardcoded_size(
        &self,
        result: &mut AnalysisResult,
        doc: &Document,
        index: &SignatureIndex,
        call: NodeId,
    ) {
        let Some(size_arg) = find_argument(doc, index, call, "fontSize") else {
            return;
        };
        if !is_literal_rooted(doc, size_arg) {
            return;
        }

        result.add(Diagnostic::warning(
            "HardcodedTextSize",
            Category::Usability,
            "Avoid using hardcoded text sizes. Use theme typography instead.",
            doc.location(size_arg),
        ));
    }
}

impl Default for TextStyleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for TextStyleAnalyzer {
    fn name(&self) -> &'static str {
        "text_style"
    }

    fn analyze(&self, doc: &Document, index: &SignatureIndex) -> AnalysisResult {
        let mut result = AnalysisResult::new();
        result.add_file(doc.file().to_path_buf());

        for id in doc.node_ids() {
            let node = doc.node(id);
            if !node.is_call() || !node.name().is_some_and(|n| TEXT_COMPONENTS.contains(&n)) {
                continue;
            }
            self.check_color_contrast(&mut result, doc, index, id);
            self.check_hardcoded_size(&mut result, doc, index, id);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn analyze(source: &str) -> AnalysisResult {
        let doc = Document::parse(source, Path::new("test.kt"));
        let mut index = SignatureIndex::new();
        index.index_document(&doc);
        TextStyleAnalyzer::new().analyze(&doc, &index)
    }

    fn find<'r>(result: &'r AnalysisResult, rule: &str) -> Option<&'r Diagnostic> {
        result.diagnostics.iter().find(|d| d.rule_id == rule)
    }

    #[test]
    fn test_low_contrast_pale_red_on_white() {
        let result = analyze(
            r#"
            Box(modifier = Modifier.fillMaxSize().background(Color.White)) {
                Text(
                    text = "Can you read this?",
                    color = Color(0xFFBB8383)
                )
            }
            "#,
        );
        let diag = find(&result, "ColorContrast").unwrap();
        assert!(diag.message.starts_with("Insufficient color contrast of "));
        assert!(diag.message.contains("4.5:1"));
        assert!(diag.message.contains("normal text"));
    }

    #[test]
    fn test_black_on_white_passes() {
        let result = analyze(
            r#"
            Box(modifier = Modifier.background(Color.White)) {
                Text("hi", color = Color.Black)
            }
            "#,
        );
        assert!(find(&result, "ColorContrast").is_none());
    }

    #[test]
    fn test_large_text_uses_relaxed_threshold() {
        // 3.95:1 fails at 4.5 but passes the 3.0 large-text bar
        let source_normal = r#"
            Box(modifier = Modifier.background(Color.White)) {
                Text("x", color = Color(0xFF948080), fontSize = 14.sp)
            }
        "#;
        let source_large = r#"
            Box(modifier = Modifier.background(Color.White)) {
                Text("x", color = Color(0xFF948080), fontSize = 20.sp)
            }
        "#;
        assert!(find(&analyze(source_normal), "ColorContrast").is_some());
        assert!(find(&analyze(source_large), "ColorContrast").is_none());
    }

    #[test]
    fn test_unknown_background_stays_silent() {
        let result = analyze(r#"Text("hi", color = Color(0xFFBB8383))"#);
        assert!(find(&result, "ColorContrast").is_none());
    }

    #[test]
    fn test_theme_color_stays_silent() {
        let result = analyze(
            r#"
            Box(modifier = Modifier.background(Color.White)) {
                Text("hi", color = MaterialTheme.colorScheme.primary)
            }
            "#,
        );
        assert!(find(&result, "ColorContrast").is_none());
    }

    #[test]
    fn test_hardcoded_text_size() {
        let result = analyze(r#"Text("hi", fontSize = 16.sp)"#);
        let diag = find(&result, "HardcodedTextSize").unwrap();
        assert_eq!(
            diag.message,
            "Avoid using hardcoded text sizes. Use theme typography instead."
        );
    }

    #[test]
    fn test_theme_typography_size_accepted() {
        let result = analyze(r#"Text("hi", fontSize = MaterialTheme.typography.bodyLarge.fontSize)"#);
        assert!(find(&result, "HardcodedTextSize").is_none());
    }

    #[test]
    fn test_non_text_calls_ignored() {
        let result = analyze(r#"Badge(color = Color(0xFFBB8383), fontSize = 12.sp)"#);
        assert!(result.diagnostics.is_empty());
    }
}
