//! Word validation against grapheme constraints.
//!
//! [`WordValidator`] is the only place where allowed/banned grapheme
//! decisions are made. Both the word-list and decodable-text rules go
//! through it.

use super::finding::Finding;
use super::rule::{Category, RuleId, Severity};
use super::segment::GraphemeSegmenter;
use crate::lesson::GraphemeConstraints;

/// Validates single words against a lesson's constraints.
pub struct WordValidator<'a> {
    constraints: &'a GraphemeConstraints,
    segmenter: &'a dyn GraphemeSegmenter,
    rule_id: RuleId,
}

impl<'a> WordValidator<'a> {
    /// Create a validator that attributes findings to `rule_id`.
    pub fn new(
        constraints: &'a GraphemeConstraints,
        segmenter: &'a dyn GraphemeSegmenter,
        rule_id: RuleId,
    ) -> Self {
        Self {
            constraints,
            segmenter,
            rule_id,
        }
    }

    /// Validate `word`, pushing at most one finding onto `findings`.
    ///
    /// Sight words always pass. Otherwise graphemes are checked left to
    /// right and the first banned or untaught grapheme ends the check.
    /// Non-alphabetic graphemes are only checked against the banned set.
    pub fn validate(&self, word: &str, location: &str, findings: &mut Vec<Finding>) -> bool {
        if self.constraints.is_sight_word(word) {
            return true;
        }

        for grapheme in self.segmenter.segment(word) {
            if self.constraints.is_banned(&grapheme) {
                findings.push(
                    Finding::new(
                        self.rule_id.clone(),
                        Severity::Blocker,
                        Category::Phonics,
                        format!("Word '{}' contains banned grapheme '{}'", word, grapheme),
                    )
                    .with_location(location),
                );
                return false;
            }

            if is_alphabetic(&grapheme) && !self.constraints.is_allowed(&grapheme) {
                findings.push(
                    Finding::new(
                        self.rule_id.clone(),
                        Severity::Blocker,
                        Category::Phonics,
                        format!(
                            "Word '{}' contains grapheme '{}' not in allowedGraphemes",
                            word, grapheme
                        ),
                    )
                    .with_location(location),
                );
                return false;
            }
        }

        true
    }
}

fn is_alphabetic(grapheme: &str) -> bool {
    !grapheme.is_empty() && grapheme.chars().all(char::is_alphabetic)
}
