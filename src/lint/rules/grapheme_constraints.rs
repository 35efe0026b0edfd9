//! Grapheme constraint sanity checks.
//!
//! A lesson without allowed graphemes cannot decode anything. An empty
//! banned list is only a warning; advanced lessons may ban nothing.

use crate::lint::{Category, Finding, LintContext, LintRule, RuleId, Severity};

/// Validates that the lesson defines usable grapheme sets.
pub struct GraphemeConstraintsRule;

impl LintRule for GraphemeConstraintsRule {
    fn id(&self) -> RuleId {
        RuleId::new("grapheme-constraints")
    }

    fn name(&self) -> &str {
        "Grapheme Constraints"
    }

    fn description(&self) -> &str {
        "Ensures allowedGraphemes is non-empty and warns when bannedGraphemes is empty"
    }

    fn default_severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        if ctx.constraints.allowed.is_empty() {
            findings.push(
                Finding::new(
                    self.id(),
                    self.default_severity(),
                    Category::Phonics,
                    "allowedGraphemes is empty or missing",
                )
                .with_suggestion("List the graphemes taught up to and including this lesson"),
            );
        }

        if ctx.constraints.banned.is_empty() {
            findings.push(Finding::new(
                self.id(),
                Severity::Major,
                Category::Phonics,
                "bannedGraphemes is empty - this may be intentional for advanced lessons",
            ));
        }

        findings
    }
}
