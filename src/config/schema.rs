//! Configuration schema definitions.

use serde::Deserialize;

use crate::lint::{Linter, OutputFormat, RulePolicy, RuleRegistry, Severity};

/// Root configuration structure for `.lesson-lint.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Keywords forbidden in addition to the built-in calm design list.
    pub extra_forbidden_keywords: Vec<String>,

    /// Fail lessons on MAJOR findings as well.
    pub strict: bool,

    /// File name looked up in each lesson directory in batch mode.
    pub lesson_file: String,

    /// Default output format.
    pub format: OutputFormat,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extra_forbidden_keywords: Vec::new(),
            strict: false,
            lesson_file: default_lesson_file(),
            format: OutputFormat::Human,
        }
    }
}

fn default_lesson_file() -> String {
    "lesson.json".to_string()
}

impl LintConfig {
    /// The rule policy described by this config.
    pub fn policy(&self) -> RulePolicy {
        RulePolicy::default().with_extra_keywords(self.extra_forbidden_keywords.iter().cloned())
    }

    /// Build a linter from this config.
    pub fn linter(&self) -> Linter {
        let linter = Linter::new(RuleRegistry::with_policy(&self.policy()));
        if self.strict {
            linter.with_threshold(Severity::Major)
        } else {
            linter
        }
    }
}
