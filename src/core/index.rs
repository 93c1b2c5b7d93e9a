//! Callable signature index
//!
//! Maps callable names to formal parameter lists so call-site arguments can
//! be resolved positionally. Ships with the Compose component signatures the
//! rules interrogate; `fun` declarations found while parsing are registered
//! on top, so project composables resolve too.

use super::document::Document;
use std::collections::HashMap;

/// A formal parameter of a callable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalParameter {
    pub name: String,
    /// Zero-based position in the declaration
    pub position: usize,
    /// Default value source text, if declared
    pub default: Option<String>,
}

/// Index of known callable signatures
#[derive(Debug, Default)]
pub struct SignatureIndex {
    signatures: HashMap<String, Vec<FormalParameter>>,
}

impl SignatureIndex {
    /// Index pre-seeded with the builtin component signatures
    pub fn new() -> Self {
        let mut index = Self::default();
        for (name, params) in BUILTIN_SIGNATURES {
            index.register_names(name, params);
        }
        index
    }

    /// Empty index, no builtins
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, params: Vec<FormalParameter>) {
        self.signatures.insert(name.into(), params);
    }

    fn register_names(&mut self, name: &str, params: &[&str]) {
        let params = params
            .iter()
            .enumerate()
            .map(|(position, p)| FormalParameter {
                name: (*p).to_string(),
                position,
                default: None,
            })
            .collect();
        self.signatures.insert(name.to_string(), params);
    }

    /// Register every function declaration found in a document.
    ///
    /// Builtins are never overwritten; a project-local `Text` shadow would
    /// otherwise silently change how library calls resolve.
    pub fn index_document(&mut self, doc: &Document) {
        for decl in doc.functions() {
            if !self.signatures.contains_key(&decl.name) {
                self.signatures
                    .insert(decl.name.clone(), decl.params.clone());
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&[FormalParameter]> {
        self.signatures.get(name).map(|p| p.as_slice())
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// Builtin component and modifier signatures, in declaration order.
///
/// Trimmed to the leading parameters real call sites pass positionally;
/// anything beyond is almost always named in practice and named arguments
/// resolve without a signature.
const BUILTIN_SIGNATURES: &[(&str, &[&str])] = &[
    (
        "Text",
        &[
            "text",
            "modifier",
            "color",
            "fontSize",
            "fontStyle",
            "fontWeight",
            "fontFamily",
            "letterSpacing",
            "textDecoration",
            "textAlign",
            "lineHeight",
            "overflow",
            "softWrap",
            "maxLines",
            "minLines",
            "onTextLayout",
            "style",
        ],
    ),
    (
        "Image",
        &[
            "painter",
            "contentDescription",
            "modifier",
            "alignment",
            "contentScale",
            "alpha",
            "colorFilter",
        ],
    ),
    (
        "Icon",
        &["imageVector", "contentDescription", "modifier", "tint"],
    ),
    (
        "Button",
        &[
            "onClick",
            "modifier",
            "enabled",
            "shape",
            "colors",
            "elevation",
            "border",
            "contentPadding",
            "interactionSource",
            "content",
        ],
    ),
    (
        "IconButton",
        &["onClick", "modifier", "enabled", "colors", "interactionSource", "content"],
    ),
    (
        "TextField",
        &[
            "value",
            "onValueChange",
            "modifier",
            "enabled",
            "readOnly",
            "textStyle",
            "label",
            "placeholder",
        ],
    ),
    (
        "OutlinedTextField",
        &[
            "value",
            "onValueChange",
            "modifier",
            "enabled",
            "readOnly",
            "textStyle",
            "label",
            "placeholder",
        ],
    ),
    (
        "Switch",
        &[
            "checked",
            "onCheckedChange",
            "modifier",
            "thumbContent",
            "enabled",
            "colors",
            "interactionSource",
        ],
    ),
    (
        "Checkbox",
        &["checked", "onCheckedChange", "modifier", "enabled", "colors", "interactionSource"],
    ),
    (
        "Surface",
        &[
            "modifier",
            "shape",
            "color",
            "contentColor",
            "tonalElevation",
            "shadowElevation",
            "border",
            "content",
        ],
    ),
    ("Box", &["modifier", "contentAlignment", "propagateMinimumConstraints", "content"]),
    ("Column", &["modifier", "verticalArrangement", "horizontalAlignment", "content"]),
    ("Row", &["modifier", "horizontalArrangement", "verticalAlignment", "content"]),
    ("Scaffold", &["modifier", "topBar", "bottomBar", "containerColor", "content"]),
    // Modifier factories
    ("background", &["color", "shape"]),
    ("clickable", &["enabled", "onClickLabel", "role", "onClick"]),
    ("size", &["size"]),
    ("width", &["width"]),
    ("height", &["height"]),
    ("padding", &["all"]),
    // Constructors
    ("Color", &["color"]),
];
