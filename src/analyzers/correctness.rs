//! Correctness analyzer
//!
//! Expression-level checks that are not UI-specific: the not-null
//! assertion operator and redundant double negation, both with suggested
//! rewrites.

use super::Analyzer;
use crate::core::parser::{Expr, UnaryOp};
use crate::core::{
    AnalysisResult, Category, Diagnostic, Document, Fix, NodeId, Range, SignatureIndex,
};

pub struct CorrectnessAnalyzer;

impl CorrectnessAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Postfix `!!` throws at runtime when the value is null
    fn check_not_null_assertion(&self, result: &mut AnalysisResult, doc: &Document, id: NodeId) {
        let node = doc.node(id);
        let Expr::Unary {
            op: UnaryOp::NotNull,
            operand,
        } = node.expr
        else {
            return;
        };

        let operand_text = doc.node_text(operand);
        let full_range = doc.node_range(id);
        // The trailing `!!` is the last two bytes of the expression
        let operator_range = Range::from_offsets(doc.source(), node.end - 2, node.end);

        result.add(
            Diagnostic::error(
                "NotNullAssertion",
                Category::Correctness,
                "Avoid using the not-null assertion operator (`!!`). It throws a \
                 NullPointerException when the value is null.",
                doc.location(id),
            )
            .with_fix(Fix::new(
                "Replace with requireNotNull()",
                full_range,
                format!("requireNotNull({})", operand_text),
            ))
            .with_fix(Fix::new(
                "Replace with an elvis default",
                operator_range,
                " ?: error(\"null value\")",
            )),
        );
    }

    /// Stacked or chained negations that cancel out
    fn check_double_negation(&self, result: &mut AnalysisResult, doc: &Document, id: NodeId) {
        let node = doc.node(id);

        match &node.expr {
            // `!!expr` or `!(!expr)`
            Expr::Unary {
                op: UnaryOp::Not,
                operand,
            } => {
                let inner = doc.node(*operand);
                if let Expr::Unary {
                    op: UnaryOp::Not,
                    operand: innermost,
                } = inner.expr
                {
                    let simplified = doc.node_text(innermost).to_string();
                    result.add(
                        Diagnostic::warning(
                            "DoubleNegation",
                            Category::Correctness,
                            "Redundant double negation (`!!expr`). Simplify to just `expr`.",
                            doc.location(id),
                        )
                        .with_fix(Fix::new(
                            "Remove double negation",
                            doc.node_range(id),
                            simplified,
                        )),
                    );
                } else if inner.is_call() && inner.name() == Some("not") {
                    // `!x.not()`
                    if let Some(receiver) = inner.receiver() {
                        let simplified = doc.node_text(receiver).to_string();
                        result.add(
                            Diagnostic::warning(
                                "DoubleNegation",
                                Category::Correctness,
                                "Simplify `!x.not()` to `x`.",
                                doc.location(id),
                            )
                            .with_fix(Fix::new(
                                "Remove double negation",
                                doc.node_range(id),
                                simplified,
                            )),
                        );
                    }
                }
            }
            // `x.not().not()` and `x.isEmpty().not()` family
            Expr::Call { name, receiver, .. } if name.as_str() == "not" => {
                let Some(receiver) = *receiver else { return };
                let recv_node = doc.node(receiver);
                if !recv_node.is_call() {
                    return;
                }

                match recv_node.name() {
                    Some("not") => {
                        let simplified = recv_node
                            .receiver()
                            .map(|r| doc.node_text(r).to_string())
                            .unwrap_or_default();
                        result.add(
                            Diagnostic::warning(
                                "DoubleNegation",
                                Category::Correctness,
                                "Simplify `x.not().not()` to `x`.",
                                doc.location(id),
                            )
                            .with_fix(Fix::new(
                                "Remove double negation",
                                doc.node_range(id),
                                simplified,
                            )),
                        );
                    }
                    Some(inverted) if inverted == "isEmpty" || inverted == "isNotEmpty" => {
                        let Some(base) = recv_node.receiver() else {
                            return;
                        };
                        let replacement_call = if inverted == "isEmpty" {
                            "isNotEmpty"
                        } else {
                            "isEmpty"
                        };
                        let simplified =
                            format!("{}.{}()", doc.node_text(base), replacement_call);
                        result.add(
                            Diagnostic::warning(
                                "DoubleNegation",
                                Category::Correctness,
                                format!(
                                    "Simplify `x.{}().not()` to `x.{}()`.",
                                    inverted, replacement_call
                                ),
                                doc.location(id),
                            )
                            .with_fix(Fix::new(
                                format!("Replace with {}()", replacement_call),
                                doc.node_range(id),
                                simplified,
                            )),
                        );
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

impl Default for CorrectnessAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for CorrectnessAnalyzer {
    fn name(&self) -> &'static str {
        "correctness"
    }

    fn analyze(&self, doc: &Document, _index: &SignatureIndex) -> AnalysisResult {
        let mut result = AnalysisResult::new();
        result.add_file(doc.file().to_path_buf());

        for id in doc.node_ids() {
            self.check_not_null_assertion(&mut result, doc, id);
            self.check_double_negation(&mut result, doc, id);
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
        let index = SignatureIndex::new();
        CorrectnessAnalyzer::new().analyze(&doc, &index)
    }

    fn find<'r>(result: &'r AnalysisResult, rule: &str) -> Vec<&'r Diagnostic> {
        result
            .diagnostics
            .iter()
            .filter(|d| d.rule_id == rule)
            .collect()
    }

    #[test]
    fn test_not_null_assertion() {
        let result = analyze("val name = user!!.name");
        let diags = find(&result, "NotNullAssertion");
        assert_eq!(diags.len(), 1);

        let fixes = &diags[0].fixes;
        assert_eq!(fixes.len(), 2);
        assert_eq!(fixes[0].replacement, "requireNotNull(user)");
        assert_eq!(fixes[1].replacement, " ?: error(\"null value\")");
    }

    #[test]
    fn test_prefix_double_bang_is_double_negation() {
        let result = analyze("val visible = !!flag");
        assert!(find(&result, "NotNullAssertion").is_empty());

        let diags = find(&result, "DoubleNegation");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].message,
            "Redundant double negation (`!!expr`). Simplify to just `expr`."
        );
        assert_eq!(diags[0].fixes[0].replacement, "flag");
    }

    #[test]
    fn test_parenthesized_double_not() {
        let result = analyze("val visible = !(!flag)");
        let diags = find(&result, "DoubleNegation");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].fixes[0].replacement, "flag");
    }

    #[test]
    fn test_bang_not_call() {
        let result = analyze("val v = !enabled.not()");
        let diags = find(&result, "DoubleNegation");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Simplify `!x.not()` to `x`.");
        assert_eq!(diags[0].fixes[0].replacement, "enabled");
    }

    #[test]
    fn test_not_not_chain() {
        let result = analyze("val v = enabled.not().not()");
        let diags = find(&result, "DoubleNegation");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Simplify `x.not().not()` to `x`.");
        assert_eq!(diags[0].fixes[0].replacement, "enabled");
    }

    #[test]
    fn test_is_empty_not() {
        let result = analyze("val v = items.isEmpty().not()");
        let diags = find(&result, "DoubleNegation");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].fixes[0].replacement, "items.isNotEmpty()");
    }

    #[test]
    fn test_is_not_empty_not() {
        let result = analyze("val v = items.isNotEmpty().not()");
        let diags = find(&result, "DoubleNegation");
        assert_eq!(diags[0].fixes[0].replacement, "items.isEmpty()");
    }

    #[test]
    fn test_single_negation_is_fine() {
        let result = analyze("val v = !flag\nval w = items.isEmpty()");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_not_null_in_expression_position() {
        let result = analyze(r#"Text(text = state.value!!)"#);
        assert_eq!(find(&result, "NotNullAssertion").len(), 1);
    }
}
