//! Read-only accessors over a decoded lesson.

use serde_json::Value;

/// A decoded lesson document.
///
/// Wraps the raw JSON tree so that field presence can be checked
/// separately from field content. Accessors never fail; a field of the
/// wrong shape reads the same as a missing one.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonDocument {
    root: Value,
}

/// One entry of the lesson's `wordList`.
#[derive(Debug, Clone, Copy)]
pub struct WordEntry<'a> {
    value: &'a Value,
}

/// The lesson's `decodableText` block.
#[derive(Debug, Clone, Copy)]
pub struct DecodableText<'a> {
    value: &'a Value,
}

/// One entry of the lesson's `steps`.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    value: &'a Value,
}

impl LessonDocument {
    /// Wrap an already decoded document.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Decode a document from JSON text.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s).map(Self::new)
    }

    /// Decode a document from YAML text.
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s).map(Self::new)
    }

    /// The raw decoded tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Whether the top-level mapping contains `name`, regardless of its value.
    pub fn has_field(&self, name: &str) -> bool {
        self.root
            .as_object()
            .is_some_and(|map| map.contains_key(name))
    }

    /// Look up a top-level field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.root.get(name)
    }

    /// The lesson title, or `""` when absent.
    pub fn title(&self) -> &str {
        str_field(&self.root, "title")
    }

    /// The `graphemeConstraints` mapping, if present.
    pub fn grapheme_constraints(&self) -> Option<&Value> {
        self.field("graphemeConstraints").filter(|v| v.is_object())
    }

    /// Entries of `wordList` in document order.
    pub fn word_list(&self) -> Vec<WordEntry<'_>> {
        array_field(&self.root, "wordList")
            .iter()
            .map(|value| WordEntry { value })
            .collect()
    }

    /// The `decodableText` block, if present and non-empty.
    pub fn decodable_text(&self) -> Option<DecodableText<'_>> {
        self.field("decodableText")
            .filter(|v| v.as_object().is_some_and(|map| !map.is_empty()))
            .map(|value| DecodableText { value })
    }

    /// Entries of `steps` in document order.
    pub fn steps(&self) -> Vec<Step<'_>> {
        array_field(&self.root, "steps")
            .iter()
            .map(|value| Step { value })
            .collect()
    }

    /// Transcripts of every entry in `audioAssets`, in document order.
    pub fn audio_transcripts(&self) -> Vec<&str> {
        array_field(&self.root, "audioAssets")
            .iter()
            .map(|asset| str_field(asset, "transcript"))
            .collect()
    }
}

impl<'a> WordEntry<'a> {
    /// The word, or `""` when absent.
    pub fn word(&self) -> &'a str {
        str_field(self.value, "word")
    }

    /// The author-supplied segmentation. Empty when not supplied.
    pub fn graphemes(&self) -> Vec<&'a str> {
        array_field(self.value, "graphemes")
            .iter()
            .filter_map(Value::as_str)
            .collect()
    }
}

impl<'a> DecodableText<'a> {
    /// The `text` of every sentence, in document order.
    pub fn sentences(&self) -> Vec<&'a str> {
        array_field(self.value, "sentences")
            .iter()
            .map(|sentence| str_field(sentence, "text"))
            .collect()
    }
}

impl<'a> Step<'a> {
    /// The step type, if it is a string.
    pub fn step_type(&self) -> Option<&'a str> {
        self.value.get("type").and_then(Value::as_str)
    }

    /// The step title, or `""` when absent.
    pub fn title(&self) -> &'a str {
        str_field(self.value, "title")
    }

    /// The step instruction, or `""` when absent.
    pub fn instruction(&self) -> &'a str {
        str_field(self.value, "instruction")
    }

    /// `displayText` and `completionMessage`, when `content` is a mapping.
    pub fn content_text(&self) -> Option<(&'a str, &'a str)> {
        let content = self.value.get("content").filter(|v| v.is_object())?;
        Some((
            str_field(content, "displayText"),
            str_field(content, "completionMessage"),
        ))
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
