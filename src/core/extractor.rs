//! Color and dimension extraction from argument expressions

use super::document::Document;
use super::parser::{Expr, LiteralValue, NodeId};
use regex::Regex;
use std::sync::LazyLock;

/// `Color(0x...)` constructor, with or without the `color =` name
static HEX_COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Color\s*\(\s*(?:color\s*=\s*)?0[xX]([0-9a-fA-F]+)\s*\)").unwrap()
});

/// Textual `N.dp` / `N.sp` fallback for expressions the tree does not model
static DIMENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)[fF]?\s*\.\s*(dp|sp)$").unwrap());

/// Named constants on the `Color` companion
const NAMED_COLORS: &[(&str, u32)] = &[
    ("Black", 0xFF000000),
    ("DarkGray", 0xFF444444),
    ("Gray", 0xFF888888),
    ("LightGray", 0xFFCCCCCC),
    ("White", 0xFFFFFFFF),
    ("Red", 0xFFFF0000),
    ("Green", 0xFF00FF00),
    ("Blue", 0xFF0000FF),
    ("Yellow", 0xFFFFFF00),
    ("Cyan", 0xFF00FFFF),
    ("Magenta", 0xFFFF00FF),
    ("Transparent", 0x00000000),
];

/// An ARGB color value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

/// A sized dimension from an argument expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Dp(f64),
    Sp(f64),
    /// Bare numeric literal with no unit selector
    Unitless(f64),
}

impl Dimension {
    pub fn value(self) -> f64 {
        match self {
            Dimension::Dp(v) | Dimension::Sp(v) | Dimension::Unitless(v) => v,
        }
    }
}

/// Extract a concrete color from an argument expression.
///
/// Handles `Color(0xAARRGGBB)` and `Color(0xRRGGBB)` constructors (six hex
/// digits get an opaque alpha), `Color.Name` constants, and bare integer
/// literals. Theme lookups and anything dynamic return `None`.
pub fn extract_color(doc: &Document, node: NodeId) -> Option<Color> {
    let text = doc.node_text(node);

    if let Some(caps) = HEX_COLOR_PATTERN.captures(text) {
        let digits = caps.get(1)?.as_str();
        let value = u64::from_str_radix(digits, 16).ok()?;
        return match digits.len() {
            6 => Some(Color(0xFF000000 | value as u32)),
            8 => Some(Color(value as u32)),
            _ => None,
        };
    }

    let data = doc.node(node);
    match &data.expr {
        Expr::Reference { name, receiver } => {
            let recv = (*receiver)?;
            if doc.node(recv).name() != Some("Color") {
                return None;
            }
            NAMED_COLORS
                .iter()
                .find(|(n, _)| *n == name.as_str())
                .map(|&(_, v)| Color(v))
        }
        // Literals wider than 32 bits cannot name an ARGB color
        Expr::Literal(LiteralValue::Int(v)) => u32::try_from(*v).ok().map(Color),
        _ => None,
    }
}

/// Extract a dimension from an argument expression.
///
/// Recognizes `N.dp`, `N.sp` (integer or float base) and bare numeric
/// literals as unitless. A textual tier over the raw source catches unit
/// selectors the tree did not model.
pub fn extract_dimension(doc: &Document, node: NodeId) -> Option<Dimension> {
    let data = doc.node(node);
    match &data.expr {
        Expr::Reference { name, receiver } => {
            if let Some(base) = receiver.and_then(|recv| numeric_value(doc, recv)) {
                match name.as_str() {
                    "dp" => return Some(Dimension::Dp(base)),
                    "sp" => return Some(Dimension::Sp(base)),
                    _ => return None,
                }
            }
        }
        Expr::Literal(_) => return numeric_value(doc, node).map(Dimension::Unitless),
        _ => {}
    }

    let caps = DIMENSION_PATTERN.captures(doc.node_text(node).trim())?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    match caps.get(2)?.as_str() {
        "dp" => Some(Dimension::Dp(value)),
        "sp" => Some(Dimension::Sp(value)),
        _ => None,
    }
}

/// Extract a font size in scalable pixels.
///
/// Unitless literals are taken at face value; `dp` is not a text unit and
/// does not count.
pub fn extract_font_size(doc: &Document, node: NodeId) -> Option<f64> {
    match extract_dimension(doc, node)? {
        Dimension::Sp(v) | Dimension::Unitless(v) => Some(v),
        Dimension::Dp(_) => None,
    }
}

/// Whether an expression bottoms out at a numeric literal through a unit or
/// conversion chain (`16.sp`, `16.5f.sp`, plain `16`)
pub fn is_literal_rooted(doc: &Document, node: NodeId) -> bool {
    let mut current = node;
    loop {
        let data = doc.node(current);
        match &data.expr {
            Expr::Literal(LiteralValue::Int(_)) | Expr::Literal(LiteralValue::Float(_)) => {
                return true
            }
            Expr::Reference {
                receiver: Some(recv),
                ..
            }
            | Expr::Call {
                receiver: Some(recv),
                ..
            } => current = *recv,
            _ => return false,
        }
    }
}

fn numeric_value(doc: &Document, node: NodeId) -> Option<f64> {
    match doc.node(node).literal()? {
        LiteralValue::Int(v) => Some(*v as f64),
        LiteralValue::Float(v) => Some(*v),
        _ => None,
    }
}
