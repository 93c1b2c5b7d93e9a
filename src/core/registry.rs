//! Rule metadata registry
//!
//! One immutable record per shipped rule. Rule identifiers and default
//! severities are the stable contract consumers filter and suppress by;
//! do not rename an id without a deprecation path.

use super::types::{Category, Severity};

/// Metadata for a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    pub id: &'static str,
    pub brief: &'static str,
    pub explanation: &'static str,
    pub category: Category,
    pub severity: Severity,
}

/// All rules known to the analyzer
pub static RULES: &[RuleInfo] = &[
    RuleInfo {
        id: "RawButtonUsage",
        brief: "Use AccessibleButton",
        explanation: "Raw Button does not guarantee accessibility. Use AccessibleButton instead.",
        category: Category::Usability,
        severity: Severity::Error,
    },
    RuleInfo {
        id: "RawTextUsage",
        brief: "Use AccessibleText",
        explanation: "Raw Text does not guarantee accessibility. Use AccessibleText instead.",
        category: Category::Usability,
        severity: Severity::Error,
    },
    RuleInfo {
        id: "RawTextFieldUsage",
        brief: "Use AccessibleTextField",
        explanation: "Raw TextField does not guarantee accessibility. Use AccessibleTextField instead.",
        category: Category::Usability,
        severity: Severity::Error,
    },
    RuleInfo {
        id: "MissingImageDescription",
        brief: "Image/Icon missing contentDescription",
        explanation: "Images must provide a contentDescription, or set it null explicitly if decorative.",
        category: Category::Accessibility,
        severity: Severity::Error,
    },
    RuleInfo {
        id: "SmallTouchTarget",
        brief: "Touch target too small (<48dp)",
        explanation: "Images and icons must measure at least 48dp in every dimension \
                      (WCAG 2.1 Guideline 2.5.5). Use Modifier.sizeIn(minWidth = 48.dp, minHeight = 48.dp).",
        category: Category::Accessibility,
        severity: Severity::Error,
    },
    RuleInfo {
        id: "ClickableElementSemantics",
        brief: "Clickable element missing semantics",
        explanation: "Clickable elements should have a contentDescription or text so screen \
                      readers can announce them.",
        category: Category::Accessibility,
        severity: Severity::Warning,
    },
    RuleInfo {
        id: "MissingStateDescription",
        brief: "Missing stateDescription",
        explanation: "Toggleable components like Switch and Checkbox should have a stateDescription \
                      so screen readers can announce their state.",
        category: Category::Accessibility,
        severity: Severity::Warning,
    },
    RuleInfo {
        id: "ColorContrast",
        brief: "Insufficient color contrast",
        explanation: "The contrast between the text color and its background is too low. \
                      WCAG 2.1 AA requires a ratio of at least 4.5:1 for normal text and \
                      3.0:1 for large text (18sp or more).",
        category: Category::Accessibility,
        severity: Severity::Error,
    },
    RuleInfo {
        id: "HardcodedTextSize",
        brief: "Hardcoded text size",
        explanation: "Hardcoded text sizes lead to inconsistent UI and accessibility issues. \
                      Use typography styles from the theme instead.",
        category: Category::Usability,
        severity: Severity::Warning,
    },
    RuleInfo {
        id: "NotNullAssertion",
        brief: "Avoid the not-null assertion operator (!!)",
        explanation: "The not-null assertion operator throws a NullPointerException at runtime \
                      if the value is null. Prefer requireNotNull(...), explicit null handling \
                      with Elvis (?:), or non-nullable types.",
        category: Category::Correctness,
        severity: Severity::Error,
    },
    RuleInfo {
        id: "DoubleNegation",
        brief: "Double negation detected",
        explanation: "Double negations reduce readability and can usually be simplified: \
                      `!!expr` to `expr`, `!x.not()` to `x`, `x.not().not()` to `x`, \
                      `x.isEmpty().not()` to `x.isNotEmpty()`.",
        category: Category::Correctness,
        severity: Severity::Warning,
    },
];

/// Look up a rule by id
pub fn find_rule(id: &str) -> Option<&'static RuleInfo> {
    RULES.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate rule id");
            }
        }
    }

    #[test]
    fn test_find_rule() {
        let rule = find_rule("ColorContrast").unwrap();
        assert_eq!(rule.category, Category::Accessibility);
        assert_eq!(rule.severity, Severity::Error);
        assert!(find_rule("NoSuchRule").is_none());
    }

    #[test]
    fn test_every_rule_has_text() {
        for rule in RULES {
            assert!(!rule.brief.is_empty());
            assert!(!rule.explanation.is_empty());
        }
    }
}
