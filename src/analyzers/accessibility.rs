//! Accessibility analyzer
//!
//! Component-level accessibility checks: raw component usage, image
//! descriptions, touch target size, clickable semantics, and toggle state
//! descriptions.

use super::Analyzer;
use crate::core::resolve::find_argument;
use crate::core::walker::{chain_contains, find_chain_call};
use crate::core::{
    extract_dimension, AnalysisResult, Category, Diagnostic, Dimension, Document, Fix, NodeId,
    Range, SignatureIndex,
};

/// Minimum touch target edge, in dp (WCAG 2.1 Guideline 2.5.5)
const MIN_TOUCH_TARGET_DP: f64 = 48.0;

/// Raw component to accessible wrapper mapping
const RAW_COMPONENTS: &[(&str, &str, &str)] = &[
    ("Button", "AccessibleButton", "RawButtonUsage"),
    ("Text", "AccessibleText", "RawTextUsage"),
    ("TextField", "AccessibleTextField", "RawTextFieldUsage"),
    ("OutlinedTextField", "AccessibleTextField", "RawTextFieldUsage"),
];

/// Components that render an image and require a content description
const IMAGE_COMPONENTS: &[&str] = &["Image", "Icon"];

/// Toggleable components that should describe their state
const TOGGLEABLE_COMPONENTS: &[&str] = &["Switch", "Checkbox"];

/// Component calls are uppercase-named; lowercase names are plain functions
/// or modifier steps
fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

pub struct AccessibilityAnalyzer;

impl AccessibilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Raw Button/Text/TextField calls should go through the accessible
    /// wrappers
    fn check_raw_component(&self, result: &mut AnalysisResult, doc: &Document, call: NodeId) {
        let node = doc.node(call);
        if node.receiver().is_some() {
            return;
        }
        let Some(name) = node.name() else { return };

        let Some(&(raw, accessible, rule_id)) =
            RAW_COMPONENTS.iter().find(|(n, _, _)| *n == name)
        else {
            return;
        };

        // The fix targets just the callee name at the head of the call
        let name_range = Range::from_offsets(doc.source(), node.start, node.start + raw.len());

        result.add(
            Diagnostic::error(
                rule_id,
                Category::Usability,
                format!(
                    "Use {} instead of raw {} for WCAG compliance.",
                    accessible, raw
                ),
                doc.location(call),
            )
            .with_fix(Fix::new(
                format!("Replace with {}", accessible),
                name_range,
                accessible,
            )),
        );
    }

    /// Image/Icon calls must mention contentDescription somewhere in their
    /// arguments, even if only an explicit `contentDescription = null` for
    /// decorative images. A textual scan keeps descriptions set through
    /// `Modifier.semantics { contentDescription = ... }` from being flagged.
    fn check_image_description(&self, result: &mut AnalysisResult, doc: &Document, call: NodeId) {
        let node = doc.node(call);
        if !node.name().is_some_and(|n| IMAGE_COMPONENTS.contains(&n)) {
            return;
        }

        let described = node.args().iter().any(|arg| {
            arg.name.as_deref() == Some("contentDescription")
                || doc.node_text(arg.value).contains("contentDescription")
        });
        if described {
            return;
        }

        result.add(Diagnostic::error(
            "MissingImageDescription",
            Category::Accessibility,
            "Image/Icon is missing contentDescription. Provide one or use \
             `contentDescription = null` explicitly if decorative.",
            doc.location(call),
        ));
    }

    /// Image/Icon sized under 48dp in any dimension. Runs regardless of
    /// whether the element is clickable or described, so a single call can
    /// get both this and MissingImageDescription.
    fn check_touch_target(
        &self,
        result: &mut AnalysisResult,
        doc: &Document,
        index: &SignatureIndex,
        call: NodeId,
    ) {
        let node = doc.node(call);
        if !node.name().is_some_and(|n| IMAGE_COMPONENTS.contains(&n)) {
            return;
        }

        // Dimensions passed directly (e.g. a size parameter)
        for arg in node.args() {
            if self.report_small_dimension(result, doc, arg.value, arg.value) {
                return;
            }
        }

        // Dimensions applied through the modifier chain
        let Some(modifier) = find_argument(doc, index, call, "modifier") else {
            return;
        };
        for sizing in ["size", "width", "height"] {
            let Some(size_call) = find_chain_call(doc, modifier, sizing) else {
                continue;
            };
            let Some(arg) = doc.node(size_call).args().first().map(|a| a.value) else {
                continue;
            };
            if self.report_small_dimension(result, doc, arg, size_call) {
                return;
            }
        }
    }

    fn report_small_dimension(
        &self,
        result: &mut AnalysisResult,
        doc: &Document,
        value: NodeId,
        at: NodeId,
    ) -> bool {
        let too_small = match extract_dimension(doc, value) {
            Some(Dimension::Dp(v)) | Some(Dimension::Unitless(v)) => v < MIN_TOUCH_TARGET_DP,
            _ => false,
        };
        if too_small {
            result.add(Diagnostic::error(
                "SmallTouchTarget",
                Category::Accessibility,
                "Touch target smaller than 48dp. Increase size or add padding.",
                doc.location(at),
            ));
        }
        too_small
    }

    /// Components made clickable via the modifier chain need something a
    /// screen reader can announce
    fn check_clickable_semantics(
        &self,
        result: &mut AnalysisResult,
        doc: &Document,
        index: &SignatureIndex,
        call: NodeId,
    ) {
        let node = doc.node(call);
        let Some(name) = node.name() else { return };
        if !is_component_name(name) {
            return;
        }

        let Some(modifier) = find_argument(doc, index, call, "modifier") else {
            return;
        };
        if !chain_contains(doc, modifier, "clickable") {
            return;
        }

        let has_semantics = find_argument(doc, index, call, "contentDescription").is_some()
            || find_argument(doc, index, call, "text").is_some()
            || chain_contains(doc, modifier, "semantics");
        if has_semantics {
            return;
        }

        result.add(Diagnostic::warning(
            "ClickableElementSemantics",
            Category::Accessibility,
            "Clickable element missing semantics. Provide a `contentDescription` or `text`.",
            doc.location(call),
        ));
    }

    /// Switch/Checkbox without a stateDescription in their semantics
    fn check_state_description(&self, result: &mut AnalysisResult, doc: &Document, call: NodeId) {
        let node = doc.node(call);
        if !node
            .name()
            .is_some_and(|n| TOGGLEABLE_COMPONENTS.contains(&n))
        {
            return;
        }

        if doc.node_text(call).contains("stateDescription") {
            return;
        }

        result.add(Diagnostic::warning(
            "MissingStateDescription",
            Category::Accessibility,
            "Missing stateDescription for toggleable component. This is important for \
             accessibility.",
            doc.location(call),
        ));
    }
}

impl Default for AccessibilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for AccessibilityAnalyzer {
    fn name(&self) -> &'static str {
        "accessibility"
    }

    fn analyze(&self, doc: &Document, index: &SignatureIndex) -> AnalysisResult {
        let mut result = AnalysisResult::new();
        result.add_file(doc.file().to_path_buf());

        for id in doc.node_ids() {
            if !doc.node(id).is_call() {
                continue;
            }
            self.check_raw_component(&mut result, doc, id);
            self.check_image_description(&mut result, doc, id);
            self.check_touch_target(&mut result, doc, index, id);
            self.check_clickable_semantics(&mut result, doc, index, id);
            self.check_state_description(&mut result, doc, id);
        }

        result
    }
}
