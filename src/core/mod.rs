//! Core analysis infrastructure: parsing, argument resolution, extraction,
//! contrast math, and the diagnostic model

pub mod contrast;
pub mod document;
pub mod extractor;
pub mod index;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod suppression;
pub mod types;
pub mod walker;

pub use contrast::{contrast_ratio, is_large_text, relative_luminance, required_ratio};
pub use document::Document;
pub use extractor::{extract_color, extract_dimension, extract_font_size, Color, Dimension};
pub use index::{FormalParameter, SignatureIndex};
pub use parser::{Argument, Expr, LiteralValue, NodeData, NodeId, NodeKind, SyntaxTree, UnaryOp};
pub use registry::{find_rule, RuleInfo, RULES};
pub use resolve::{find_argument, resolve_arguments, ArgumentMap};
pub use suppression::SuppressionContext;
pub use types::{
    AnalysisResult, Category, Diagnostic, Fix, Location, Position, Range, Severity,
};
pub use walker::effective_background;
