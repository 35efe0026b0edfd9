//! Word-to-grapheme segmentation.
//!
//! Segmentation sits behind [`GraphemeSegmenter`] so a digraph-aware
//! segmenter can replace [`CharSegmenter`] without touching the rules.

/// Splits a word into graphemes.
pub trait GraphemeSegmenter: Send + Sync {
    /// Segment `word` into lower-cased graphemes, left to right.
    fn segment(&self, word: &str) -> Vec<String>;
}

/// One grapheme per character.
///
/// Known simplification: digraphs and trigraphs such as `sh` or `igh`
/// are split into their individual letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSegmenter;

impl GraphemeSegmenter for CharSegmenter {
    fn segment(&self, word: &str) -> Vec<String> {
        word.to_lowercase().chars().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_lowercase_characters() {
        assert_eq!(CharSegmenter.segment("Cat"), vec!["c", "a", "t"]);
    }

    #[test]
    fn does_not_join_digraphs() {
        assert_eq!(CharSegmenter.segment("ship"), vec!["s", "h", "i", "p"]);
    }

    #[test]
    fn keeps_non_alphabetic_characters() {
        assert_eq!(CharSegmenter.segment("a1!"), vec!["a", "1", "!"]);
    }

    #[test]
    fn empty_word_has_no_graphemes() {
        assert!(CharSegmenter.segment("").is_empty());
    }
}
