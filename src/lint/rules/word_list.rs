//! Word list validation.
//!
//! Every `wordList` entry must be decodable with the lesson's graphemes,
//! and an explicit segmentation must spell the word it belongs to.

use tracing::trace;

use crate::lint::{Category, Finding, LintContext, LintRule, RuleId, Severity};

/// Validates the lesson's word list.
pub struct WordListRule;

impl LintRule for WordListRule {
    fn id(&self) -> RuleId {
        RuleId::new("word-list")
    }

    fn name(&self) -> &str {
        "Word List"
    }

    fn description(&self) -> &str {
        "Checks wordList entries against the grapheme constraints and their segmentation"
    }

    fn default_severity(&self) -> Severity {
        Severity::Blocker
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        let validator = ctx.word_validator(self.id());

        for (i, entry) in ctx.document.word_list().iter().enumerate() {
            let location = format!("wordList[{}]", i);
            let word = entry.word();
            let valid = validator.validate(word, &location, &mut findings);
            trace!(word, valid, "checked word list entry");

            let graphemes = entry.graphemes();
            if graphemes.is_empty() {
                continue;
            }

            let reconstructed = graphemes.concat();
            if reconstructed.to_lowercase() != word.to_lowercase() {
                findings.push(
                    Finding::new(
                        self.id(),
                        Severity::Major,
                        Category::Phonics,
                        format!(
                            "Word '{}' grapheme segmentation '{}' doesn't match",
                            word, reconstructed
                        ),
                    )
                    .with_location(location),
                );
            }
        }

        findings
    }
}
