//! Grapheme constraint extraction.
//!
//! Reads `graphemeConstraints` once per lesson and lower-cases every entry.
//! The resulting sets are shared read-only by all lint rules.

use std::collections::HashSet;

use serde_json::Value;

use super::LessonDocument;

/// Normalized phonics constraints for one lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphemeConstraints {
    /// Graphemes the learner has been taught.
    pub allowed: HashSet<String>,
    /// Graphemes that must not appear in decodable content.
    pub banned: HashSet<String>,
    /// Whole words exempt from decoding rules.
    pub sight_words: HashSet<String>,
}

impl GraphemeConstraints {
    /// Extract constraints from a lesson. Missing lists become empty sets.
    pub fn from_document(doc: &LessonDocument) -> Self {
        let Some(constraints) = doc.grapheme_constraints() else {
            return Self::default();
        };

        Self {
            allowed: lowercase_set(constraints, "allowedGraphemes"),
            banned: lowercase_set(constraints, "bannedGraphemes"),
            sight_words: lowercase_set(constraints, "sightWords"),
        }
    }

    /// Whether `word` (any case) is a sight word.
    pub fn is_sight_word(&self, word: &str) -> bool {
        self.sight_words.contains(&word.to_lowercase())
    }

    /// Whether `grapheme` is banned. Expects a lower-cased grapheme.
    pub fn is_banned(&self, grapheme: &str) -> bool {
        self.banned.contains(grapheme)
    }

    /// Whether `grapheme` is allowed. Expects a lower-cased grapheme.
    pub fn is_allowed(&self, grapheme: &str) -> bool {
        self.allowed.contains(grapheme)
    }
}

fn lowercase_set(constraints: &Value, key: &str) -> HashSet<String> {
    constraints
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_and_lowercases_all_sets() {
        let doc = LessonDocument::new(json!({
            "graphemeConstraints": {
                "allowedGraphemes": ["C", "a", "T"],
                "bannedGraphemes": ["X"],
                "sightWords": ["The", "I"]
            }
        }));

        let constraints = GraphemeConstraints::from_document(&doc);

        assert!(constraints.is_allowed("c"));
        assert!(constraints.is_allowed("t"));
        assert!(constraints.is_banned("x"));
        assert!(constraints.is_sight_word("THE"));
        assert!(constraints.is_sight_word("i"));
    }

    #[test]
    fn missing_constraints_are_empty() {
        let doc = LessonDocument::new(json!({ "title": "No constraints" }));

        let constraints = GraphemeConstraints::from_document(&doc);

        assert_eq!(constraints, GraphemeConstraints::default());
    }

    #[test]
    fn missing_sub_fields_default_to_empty() {
        let doc = LessonDocument::new(json!({
            "graphemeConstraints": { "allowedGraphemes": ["s"] }
        }));

        let constraints = GraphemeConstraints::from_document(&doc);

        assert_eq!(constraints.allowed.len(), 1);
        assert!(constraints.banned.is_empty());
        assert!(constraints.sight_words.is_empty());
    }

    #[test]
    fn non_string_entries_are_skipped() {
        let doc = LessonDocument::new(json!({
            "graphemeConstraints": { "allowedGraphemes": ["s", 1, null, "a"] }
        }));

        let constraints = GraphemeConstraints::from_document(&doc);

        assert_eq!(constraints.allowed.len(), 2);
    }
}
