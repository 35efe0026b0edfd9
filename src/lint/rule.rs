//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`LintContext`] - The lesson and derived data a rule inspects
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for findings (Minor, Major, Critical, Blocker)
//! - [`Category`] - Which family of concerns a finding belongs to

use super::finding::Finding;
use super::segment::GraphemeSegmenter;
use super::word::WordValidator;
use crate::lesson::{GraphemeConstraints, LessonDocument};

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Rule ID used for findings produced while loading a file.
    pub fn load() -> Self {
        Self::new("load")
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint findings.
///
/// Ordered from least to most severe, so `Severity::Blocker` is the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Cosmetic issue.
    Minor,
    /// Should be addressed but does not block publishing.
    Major,
    /// Blocks publishing.
    Critical,
    /// Blocks publishing; content is unusable as written.
    Blocker,
}

impl Severity {
    /// All severities, most severe first. Reports group findings in this order.
    pub const DESCENDING: [Severity; 4] = [
        Severity::Blocker,
        Severity::Critical,
        Severity::Major,
        Severity::Minor,
    ];

    /// Upper-case label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
            Severity::Blocker => "BLOCKER",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The family of concerns a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Document shape and required fields.
    Schema,
    /// Grapheme and decodability constraints.
    Phonics,
    /// Calm design content policy.
    CalmDesign,
    /// Lesson step ordering.
    Structure,
    /// The lesson file itself.
    File,
}

impl Category {
    /// Label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Schema => "Schema",
            Category::Phonics => "Phonics",
            Category::CalmDesign => "CalmDesign",
            Category::Structure => "Structure",
            Category::File => "File",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a rule may look at during one lint pass.
///
/// Built once per lesson by the [`Linter`](super::Linter) and shared
/// read-only by every rule.
pub struct LintContext<'a> {
    /// The lesson being linted.
    pub document: &'a LessonDocument,
    /// Constraints extracted from the lesson.
    pub constraints: &'a GraphemeConstraints,
    /// Word-to-grapheme segmentation in use.
    pub segmenter: &'a dyn GraphemeSegmenter,
}

impl<'a> LintContext<'a> {
    /// Create a context for one lesson.
    pub fn new(
        document: &'a LessonDocument,
        constraints: &'a GraphemeConstraints,
        segmenter: &'a dyn GraphemeSegmenter,
    ) -> Self {
        Self {
            document,
            constraints,
            segmenter,
        }
    }

    /// A word validator reporting findings under `rule_id`.
    pub fn word_validator(&self, rule_id: RuleId) -> WordValidator<'a> {
        WordValidator::new(self.constraints, self.segmenter, rule_id)
    }
}

/// A lint rule that validates a lesson.
///
/// Each rule checks one concern and produces findings when problems are
/// found. Rules never fail; a malformed lesson is reported, not rejected.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Most severe finding this rule can produce.
    fn default_severity(&self) -> Severity;

    /// Check the lesson and return any findings, in discovery order.
    fn check(&self, ctx: &LintContext<'_>) -> Vec<Finding>;
}
