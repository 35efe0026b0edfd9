//! Lint findings.
//!
//! This module provides the [`Finding`] type for representing a single
//! rule violation, with an optional path-like location inside the lesson
//! (for example `wordList[3]`).

use super::rule::{Category, RuleId, Severity};

/// A single rule violation produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The rule that produced this finding.
    pub rule_id: RuleId,
    /// Severity of this finding.
    pub severity: Severity,
    /// Family of concerns.
    pub category: Category,
    /// Human-readable message, including the offending value.
    pub message: String,
    /// Where in the lesson the issue occurs.
    pub location: Option<String>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl Finding {
    /// Create a new finding.
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        category: Category,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            severity,
            category,
            message: message.into(),
            location: None,
            suggestion: None,
        }
    }

    /// Add a location to this finding.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.category, self.message)?;
        if let Some(ref location) = self.location {
            write!(f, " at {}", location)?;
        }
        Ok(())
    }
}
