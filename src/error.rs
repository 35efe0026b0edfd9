//! Error types for lesson-lint operations.
//!
//! This module defines [`LessonLintError`], the error type used by the
//! loading, configuration and CLI layers, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - The lint engine never returns errors; problems in a lesson are findings
//! - Loading errors are turned into a single BLOCKER finding by the loader
//! - Use `anyhow::Error` (via `LessonLintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lesson-lint operations.
#[derive(Debug, Error)]
pub enum LessonLintError {
    /// Lesson file not found at the given location.
    #[error("File not found: {path}")]
    LessonNotFound { path: PathBuf },

    /// Lesson file exists but could not be decoded.
    #[error("Failed to parse lesson at {path}: {message}")]
    LessonParseError { path: PathBuf, message: String },

    /// Linter configuration file not found.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the linter configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A directory was expected (batch mode).
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lesson-lint operations.
pub type Result<T> = std::result::Result<T, LessonLintError>;
