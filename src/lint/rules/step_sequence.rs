//! Step sequence validation.
//!
//! Every lesson needs an explicit completion step, and should open with
//! orientation content (an introduction or a review).

use std::borrow::Cow;

use crate::lint::policy::{COMPLETION_STEP_TYPE, OPENING_STEP_TYPES};
use crate::lint::{Category, Finding, LintContext, LintRule, RuleId, Severity};

/// Validates the order of lesson steps.
pub struct StepSequenceRule {
    opening_types: Vec<Cow<'static, str>>,
    completion_type: Cow<'static, str>,
}

impl StepSequenceRule {
    /// Check with custom opening and completion step types.
    pub fn new(opening_types: Vec<Cow<'static, str>>, completion_type: Cow<'static, str>) -> Self {
        Self {
            opening_types,
            completion_type,
        }
    }

    fn opening_list(&self) -> String {
        self.opening_types
            .iter()
            .map(|t| format!("'{}'", t))
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl Default for StepSequenceRule {
    fn default() -> Self {
        Self::new(
            OPENING_STEP_TYPES.iter().map(|t| Cow::Borrowed(*t)).collect(),
            Cow::Borrowed(COMPLETION_STEP_TYPE),
        )
    }
}

impl LintRule for StepSequenceRule {
    fn id(&self) -> RuleId {
        RuleId::new("step-sequence")
    }

    fn name(&self) -> &str {
        "Step Sequence"
    }

    fn description(&self) -> &str {
        "Requires a completion step and an introduction or review as the first step"
    }

    fn default_severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        let step_types: Vec<Option<&str>> = ctx
            .document
            .steps()
            .iter()
            .map(|step| step.step_type())
            .collect();

        if !step_types.contains(&Some(self.completion_type.as_ref())) {
            findings.push(Finding::new(
                self.id(),
                self.default_severity(),
                Category::Structure,
                format!(
                    "Missing '{}' step - lessons must have a clear ending",
                    self.completion_type
                ),
            ));
        }

        if let Some(&first) = step_types.first() {
            let opens_correctly =
                first.is_some_and(|t| self.opening_types.iter().any(|o| o == t));
            if !opens_correctly {
                findings.push(
                    Finding::new(
                        self.id(),
                        Severity::Major,
                        Category::Structure,
                        format!(
                            "First step should be {}, found '{}'",
                            self.opening_list(),
                            first.unwrap_or("(none)")
                        ),
                    )
                    .with_location("steps[0]"),
                );
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::test_support::check;
    use serde_json::{json, Value};

    fn lesson(steps: Value) -> Value {
        json!({ "steps": steps })
    }

    #[test]
    fn well_ordered_steps_pass() {
        let findings = check(
            &StepSequenceRule::default(),
            lesson(json!([
                { "type": "introduction" },
                { "type": "explicit_phonics" },
                { "type": "completion" }
            ])),
        );

        assert!(findings.is_empty());
    }

    #[test]
    fn review_is_a_valid_opening() {
        let findings = check(
            &StepSequenceRule::default(),
            lesson(json!([{ "type": "review" }, { "type": "completion" }])),
        );

        assert!(findings.is_empty());
    }

    #[test]
    fn wrong_first_step_is_major_and_names_the_type() {
        let findings = check(
            &StepSequenceRule::default(),
            lesson(json!([{ "type": "explicit_phonics" }, { "type": "completion" }])),
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Major);
        assert_eq!(findings[0].category, Category::Structure);
        assert_eq!(
            findings[0].message,
            "First step should be 'introduction' or 'review', found 'explicit_phonics'"
        );
    }

    #[test]
    fn empty_steps_only_report_missing_completion() {
        let findings = check(&StepSequenceRule::default(), lesson(json!([])));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert!(findings[0].message.contains("'completion'"));
    }

    #[test]
    fn missing_steps_report_missing_completion() {
        let findings = check(&StepSequenceRule::default(), json!({}));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
    }

    #[test]
    fn completion_may_appear_anywhere() {
        let findings = check(
            &StepSequenceRule::default(),
            lesson(json!([{ "type": "review" }, { "type": "completion" }, { "type": "practice" }])),
        );

        assert!(findings.is_empty());
    }

    #[test]
    fn untyped_first_step_is_reported() {
        let findings = check(
            &StepSequenceRule::default(),
            lesson(json!([{ "title": "Hello" }, { "type": "completion" }])),
        );

        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.ends_with("found '(none)'"));
    }

    #[test]
    fn both_findings_in_order() {
        let findings = check(
            &StepSequenceRule::default(),
            lesson(json!([{ "type": "practice" }])),
        );

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[1].severity, Severity::Major);
    }
}
