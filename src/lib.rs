//! lesson-lint - A pre-publication gate for phonics lesson documents.
//!
//! lesson-lint checks a lesson's structure, its phonics constraints and its
//! learner-facing text, and reports severity-tagged findings with a
//! pass/fail verdict.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.lesson-lint.yml` configuration
//! - [`error`] - Error types and result aliases
//! - [`lesson`] - Lesson document model and grapheme constraints
//! - [`lint`] - Rules, findings, verdicts and output formatters
//! - [`loader`] - Lesson file loading and directory discovery
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use lesson_lint::lesson::LessonDocument;
//! use lesson_lint::lint::Linter;
//!
//! let doc = LessonDocument::from_json_str(r#"{
//!     "lessonId": "L01",
//!     "version": "1.0.0",
//!     "title": "Short a",
//!     "graphemeConstraints": { "allowedGraphemes": ["c", "a", "t"], "bannedGraphemes": ["x"] },
//!     "wordList": [{ "word": "cat" }],
//!     "steps": [{ "type": "introduction" }, { "type": "completion" }]
//! }"#).unwrap();
//!
//! let report = Linter::default().lint(&doc);
//! assert!(report.passed());
//! assert!(report.findings.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lesson;
pub mod lint;
pub mod loader;
pub mod ui;

pub use error::{LessonLintError, Result};
