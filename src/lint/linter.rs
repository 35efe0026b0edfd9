//! Lint pass orchestration.
//!
//! A [`Linter`] runs every registered rule over one lesson and derives
//! the verdict. It holds no per-lesson state, so one linter can check
//! any number of lessons, from any number of threads.

use std::path::PathBuf;

use tracing::debug;

use super::finding::Finding;
use super::registry::RuleRegistry;
use super::rule::{LintContext, Severity};
use super::segment::{CharSegmenter, GraphemeSegmenter};
use super::verdict::Verdict;
use crate::lesson::{GraphemeConstraints, LessonDocument};

/// Findings and verdict for one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// Findings in rule order, then discovery order.
    pub findings: Vec<Finding>,
    /// Pass/fail outcome.
    pub verdict: Verdict,
}

impl LintReport {
    /// Build a report, deriving the verdict with the default threshold.
    pub fn new(findings: Vec<Finding>) -> Self {
        let verdict = Verdict::from_findings(&findings);
        Self { findings, verdict }
    }

    /// Whether the lesson passed.
    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }

    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// Findings with the given severity, in report order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

/// A lint report for a lesson file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path the lesson was loaded from.
    pub path: PathBuf,
    /// The lint outcome.
    pub report: LintReport,
}

impl FileReport {
    /// Pair a report with the file it describes.
    pub fn new(path: impl Into<PathBuf>, report: LintReport) -> Self {
        Self {
            path: path.into(),
            report,
        }
    }

    /// Whether the lesson passed.
    pub fn passed(&self) -> bool {
        self.report.passed()
    }
}

/// Runs lint rules over lessons.
pub struct Linter {
    registry: RuleRegistry,
    segmenter: Box<dyn GraphemeSegmenter>,
    threshold: Severity,
}

impl Linter {
    /// Create a linter running the rules in `registry`.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            segmenter: Box::new(CharSegmenter),
            threshold: Verdict::DEFAULT_THRESHOLD,
        }
    }

    /// Replace the word segmenter.
    pub fn with_segmenter(mut self, segmenter: Box<dyn GraphemeSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Set the lowest severity that fails a lesson.
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// The rules this linter runs.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// The lowest severity that fails a lesson.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Lint one lesson.
    pub fn lint(&self, document: &LessonDocument) -> LintReport {
        let constraints = GraphemeConstraints::from_document(document);
        let ctx = LintContext::new(document, &constraints, self.segmenter.as_ref());

        let mut findings = Vec::new();
        for rule in self.registry.iter() {
            let found = rule.check(&ctx);
            debug!(rule = %rule.id(), findings = found.len(), "rule finished");
            findings.extend(found);
        }

        let verdict = Verdict::with_threshold(&findings, self.threshold);
        debug!(findings = findings.len(), %verdict, "lint pass finished");
        LintReport { findings, verdict }
    }

    /// Report for a lesson that could not be loaded. No rules run.
    pub fn load_failure(&self, finding: Finding) -> LintReport {
        LintReport {
            findings: vec![finding],
            verdict: Verdict::Fail,
        }
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(RuleRegistry::with_builtins())
    }
}
