//! Lesson validation and linting.
//!
//! This module provides lesson validation through a rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - Ordered collection of rules ([`RuleRegistry`])
//! - **Findings** - Violations with severity and category ([`Finding`])
//! - **Linter** - Runs the registry over a lesson and derives a [`Verdict`]
//!
//! # Example
//!
//! ```
//! use lesson_lint::lesson::LessonDocument;
//! use lesson_lint::lint::{Linter, Severity, Verdict};
//!
//! let doc = LessonDocument::from_json_str(r#"{ "steps": [] }"#).unwrap();
//! let report = Linter::default().lint(&doc);
//!
//! assert_eq!(report.verdict, Verdict::Fail);
//! assert!(report.count(Severity::Critical) > 0);
//!
//! // Severity has ordering
//! assert!(Severity::Major < Severity::Critical);
//! assert!(Severity::Critical < Severity::Blocker);
//! ```

pub mod finding;
pub mod linter;
pub mod output;
pub mod policy;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod segment;
pub mod verdict;
pub mod word;

pub use finding::Finding;
pub use linter::{FileReport, LintReport, Linter};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use policy::{ForbiddenKeyword, KeywordGroup, RulePolicy};
pub use registry::RuleRegistry;
pub use rule::{Category, LintContext, LintRule, RuleId, Severity};
pub use rules::{
    CalmDesignRule, DecodableTextRule, GraphemeConstraintsRule, RequiredFieldsRule,
    StepSequenceRule, WordListRule,
};
pub use segment::{CharSegmenter, GraphemeSegmenter};
pub use verdict::Verdict;
pub use word::WordValidator;
