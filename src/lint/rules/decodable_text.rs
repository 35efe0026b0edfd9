//! Decodable text validation.
//!
//! Sentences are split into runs of ASCII letters; every run must pass
//! word validation. Digits, punctuation and whitespace are separators.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{Finding, LintContext, LintRule, RuleId, Severity};

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("word pattern is valid"));

/// Validates the words of the lesson's decodable passage.
pub struct DecodableTextRule;

/// Extract maximal runs of ASCII letters from `text`.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str())
}

impl LintRule for DecodableTextRule {
    fn id(&self) -> RuleId {
        RuleId::new("decodable-text")
    }

    fn name(&self) -> &str {
        "Decodable Text"
    }

    fn description(&self) -> &str {
        "Checks every word of decodableText sentences against the grapheme constraints"
    }

    fn default_severity(&self) -> Severity {
        Severity::Blocker
    }

    fn check(&self, ctx: &LintContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        let Some(text) = ctx.document.decodable_text() else {
            return findings;
        };

        let validator = ctx.word_validator(self.id());
        for (i, sentence) in text.sentences().iter().enumerate() {
            let location = format!("decodableText.sentences[{}]", i);
            for word in tokenize(sentence) {
                validator.validate(word, &location, &mut findings);
            }
        }

        findings
    }
}
