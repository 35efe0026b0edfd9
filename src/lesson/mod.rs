//! Lesson document model.
//!
//! A lesson is linted as a read-only view over its decoded tree. Nothing
//! here fails: absent or mistyped fields read as empty so that the lint
//! rules can report them instead of the loader rejecting the file.
//!
//! - [`LessonDocument`] - Typed accessors over the decoded document
//! - [`GraphemeConstraints`] - Normalized allowed/banned/sight-word sets

pub mod constraints;
pub mod document;

pub use constraints::GraphemeConstraints;
pub use document::{DecodableText, LessonDocument, Step, WordEntry};
