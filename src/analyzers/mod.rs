//! Analyzers for Compose source files

pub mod accessibility;
pub mod correctness;
pub mod text_style;

pub use accessibility::AccessibilityAnalyzer;
pub use correctness::CorrectnessAnalyzer;
pub use text_style::TextStyleAnalyzer;

use crate::core::{AnalysisResult, Document, SignatureIndex};

/// Trait for all analyzers
pub trait Analyzer {
    /// Name of this analyzer
    fn name(&self) -> &'static str;

    /// Analyze a document and return diagnostics
    fn analyze(&self, doc: &Document, index: &SignatureIndex) -> AnalysisResult;
}
