//! Required fields validation.
//!
//! This rule ensures that required top-level lesson fields are present.
//! Only presence is checked; field types are not.

use std::borrow::Cow;

use crate::lint::policy::REQUIRED_FIELDS;
use crate::lint::{Category, Finding, LintContext, LintRule, RuleId, Severity};

/// Validates that required top-level fields are present.
pub struct RequiredFieldsRule {
    fields: Vec<Cow<'static, str>>,
}

impl RequiredFieldsRule {
    /// Check a custom list of fields.
    pub fn new(fields: Vec<Cow<'static, str>>) -> Self {
        Self { fields }
    }
}

impl Default for RequiredFieldsRule {
    fn default() -> Self {
        Self::new(REQUIRED_FIELDS.iter().map(|f| Cow::Borrowed(*f)).collect())
    }
}

impl LintRule for RequiredFieldsRule {
    fn id(&self) -> RuleId {
        RuleId::new("required-fields")
    }

    fn name(&self) -> &str {
        "Required Fields"
    }

    fn description(&self) -> &str {
        "Ensures lessonId, version, title, steps and graphemeConstraints are present"
    }

    fn default_severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Finding> {
        self.fields
            .iter()
            .filter(|field| !ctx.document.has_field(field))
            .map(|field| {
                Finding::new(
                    self.id(),
                    self.default_severity(),
                    Category::Schema,
                    format!("Missing required field: {}", field),
                )
            })
            .collect()
    }
}
