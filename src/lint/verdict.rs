//! Pass/fail verdicts.

use super::finding::Finding;
use super::rule::Severity;

/// Outcome of linting one lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The lesson may be published.
    Pass,
    /// The lesson must be fixed first.
    Fail,
}

impl Verdict {
    /// Lowest severity that fails a lesson by default.
    pub const DEFAULT_THRESHOLD: Severity = Severity::Critical;

    /// Fail iff any finding is BLOCKER or CRITICAL.
    pub fn from_findings(findings: &[Finding]) -> Self {
        Self::with_threshold(findings, Self::DEFAULT_THRESHOLD)
    }

    /// Fail iff any finding is at least as severe as `threshold`.
    pub fn with_threshold(findings: &[Finding], threshold: Severity) -> Self {
        if findings.iter().any(|f| f.severity >= threshold) {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    /// Whether this is a pass.
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}
