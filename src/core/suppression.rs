//! Inline suppression support
//!
//! Suppression comments in analyzed source files:
//! - `// compose-analyzer-disable ColorContrast` - disable a rule for the next line
//! - `// compose-analyzer-disable ColorContrast, RawTextUsage` - disable multiple rules
//! - `// compose-analyzer-disable-next-line ColorContrast` - disable for next line only
//! - `// compose-analyzer-disable` - disable all rules until re-enabled
//! - `// compose-analyzer-enable` - re-enable all rules
//!
//! Also supports inline suppression:
//! - `Text("x") // compose-analyzer-disable-line RawTextUsage`

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Pattern to match suppression comments
static DISABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"//\s*compose-analyzer-disable(?:-next-line|-line)?\s*([\w,\s]*)").unwrap()
});

/// Pattern to match enable comments
static ENABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//\s*compose-analyzer-enable\b").unwrap());

/// Suppression context for filtering diagnostics
#[derive(Debug, Default)]
pub struct SuppressionContext {
    /// Suppressions by affected line number
    line_suppressions: HashMap<usize, HashSet<String>>,
    /// Block suppressions: (start_line, end_line, rules)
    block_suppressions: Vec<(usize, usize, HashSet<String>)>,
}

impl SuppressionContext {
    /// Parse suppression comments from source
    pub fn parse(source: &str) -> Self {
        let mut ctx = Self::default();
        let lines: Vec<&str> = source.lines().collect();

        let mut block_start: Option<(usize, HashSet<String>)> = None;

        for (idx, line) in lines.iter().enumerate() {
            let line_num = idx + 1; // 1-based

            if ENABLE_PATTERN.is_match(line) {
                if let Some((start, rules)) = block_start.take() {
                    ctx.block_suppressions.push((start, line_num, rules));
                }
                continue;
            }

            if let Some(caps) = DISABLE_PATTERN.captures(line) {
                let rules_str = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                let rules = parse_rules(rules_str);
                let is_inline = line.contains("-line");
                let is_next_line = line.contains("-next-line");

                if is_inline && !is_next_line {
                    // -line: suppress on this line only
                    ctx.add_line_suppression(line_num, rules);
                } else if is_next_line {
                    ctx.add_line_suppression(line_num + 1, rules);
                } else if rules.is_empty() {
                    // Block disable all rules
                    block_start = Some((line_num + 1, HashSet::new()));
                } else {
                    // With specific rules the plain form is next-line behavior
                    ctx.add_line_suppression(line_num + 1, rules);
                }
            }
        }

        // Unclosed block extends to end of file
        if let Some((start, rules)) = block_start {
            ctx.block_suppressions.push((start, lines.len() + 1, rules));
        }

        ctx
    }

    fn add_line_suppression(&mut self, line: usize, rules: HashSet<String>) {
        self.line_suppressions
            .entry(line)
            .or_default()
            .extend(rules);
    }

    /// Check if a rule is suppressed at the given line
    pub fn is_suppressed(&self, rule_id: &str, line: usize) -> bool {
        let rule_id = rule_id.to_lowercase();

        if let Some(rules) = self.line_suppressions.get(&line) {
            if rules.is_empty() || rules.contains(&rule_id) {
                return true;
            }
        }

        for (start, end, rules) in &self.block_suppressions {
            if line >= *start
                && line <= *end
                && (rules.is_empty() || rules.contains(&rule_id))
            {
                return true;
            }
        }

        false
    }

    /// Check if any suppressions exist
    pub fn has_suppressions(&self) -> bool {
        !self.line_suppressions.is_empty() || !self.block_suppressions.is_empty()
    }
}

/// Parse comma-separated rule IDs; matching is case-insensitive
fn parse_rules(s: &str) -> HashSet<String> {
    s.split(',')
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect()
}
