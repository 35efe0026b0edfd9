//! Calm design content policy.
//!
//! Learner-facing text is joined into one lower-cased blob and searched
//! for forbidden keywords. A keyword is reported once no matter how many
//! times or in which fields it occurs.

use crate::lesson::LessonDocument;
use crate::lint::policy::{ForbiddenKeyword, FORBIDDEN_KEYWORDS};
use crate::lint::{Category, Finding, LintContext, LintRule, RuleId, Severity};

/// Flags gamification, pressure and comparison language.
pub struct CalmDesignRule {
    keywords: Vec<ForbiddenKeyword>,
}

impl CalmDesignRule {
    /// Check a custom keyword list.
    pub fn new(keywords: Vec<ForbiddenKeyword>) -> Self {
        Self { keywords }
    }

    /// The keywords this rule checks, in reporting order.
    pub fn keywords(&self) -> &[ForbiddenKeyword] {
        &self.keywords
    }
}

impl Default for CalmDesignRule {
    fn default() -> Self {
        Self::new(FORBIDDEN_KEYWORDS.to_vec())
    }
}

/// Join all learner-facing text of a lesson, lower-cased.
///
/// Order: title; for each step its title, instruction and (when content
/// is a mapping) displayText and completionMessage; then every audio
/// transcript. Pieces are separated by single spaces.
pub fn searchable_text(doc: &LessonDocument) -> String {
    let mut pieces = vec![doc.title()];

    for step in doc.steps() {
        pieces.push(step.title());
        pieces.push(step.instruction());
        if let Some((display_text, completion_message)) = step.content_text() {
            pieces.push(display_text);
            pieces.push(completion_message);
        }
    }

    pieces.extend(doc.audio_transcripts());
    pieces.join(" ").to_lowercase()
}

impl LintRule for CalmDesignRule {
    fn id(&self) -> RuleId {
        RuleId::new("calm-design")
    }

    fn name(&self) -> &str {
        "Calm Design"
    }

    fn description(&self) -> &str {
        "Flags gamification, urgency and comparison language in learner-facing text"
    }

    fn default_severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Finding> {
        let text = searchable_text(ctx.document);

        self.keywords
            .iter()
            .filter(|k| text.contains(&k.keyword.to_lowercase()))
            .map(|k| {
                Finding::new(
                    self.id(),
                    self.default_severity(),
                    Category::CalmDesign,
                    format!("Forbidden keyword found: '{}'", k.keyword),
                )
                .with_suggestion(k.group.suggestion())
            })
            .collect()
    }
}
