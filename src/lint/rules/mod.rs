//! Built-in lint rules.
//!
//! This module contains all the built-in rules that come with lesson-lint,
//! listed here in the order the registry runs them.

pub mod required_fields;
pub mod grapheme_constraints;
pub mod word_list;
pub mod decodable_text;
pub mod calm_design;
pub mod step_sequence;

pub use calm_design::CalmDesignRule;
pub use decodable_text::DecodableTextRule;
pub use grapheme_constraints::GraphemeConstraintsRule;
pub use required_fields::RequiredFieldsRule;
pub use step_sequence::StepSequenceRule;
pub use word_list::WordListRule;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::lesson::{GraphemeConstraints, LessonDocument};
    use crate::lint::{CharSegmenter, Finding, LintContext, LintRule};
    use serde_json::Value;

    /// Run a single rule against a JSON lesson.
    pub fn check(rule: &dyn LintRule, lesson: Value) -> Vec<Finding> {
        let doc = LessonDocument::new(lesson);
        let constraints = GraphemeConstraints::from_document(&doc);
        let ctx = LintContext::new(&doc, &constraints, &CharSegmenter);
        rule.check(&ctx)
    }
}
