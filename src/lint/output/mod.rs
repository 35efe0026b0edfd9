//! Lint output formatters.
//!
//! This module provides formatters for outputting lint reports
//! in different formats (human-readable, JSON, SARIF). Every formatter
//! takes the reports of one run, whether that is one lesson or a batch.

pub mod human;
pub mod json;
pub mod sarif;

use crate::lint::FileReport;
use serde::Deserialize;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format reports to the given writer.
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
