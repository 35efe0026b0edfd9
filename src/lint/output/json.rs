//! JSON output formatter.
//!
//! Formats lint reports as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{FileReport, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    passed: bool,
    lessons: Vec<JsonLesson>,
}

#[derive(Serialize)]
struct JsonLesson {
    file: String,
    passed: bool,
    findings: Vec<JsonFinding>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding {
    rule_id: String,
    severity: &'static str,
    category: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    blocker: usize,
    critical: usize,
    major: usize,
    minor: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn lesson(file: &FileReport) -> JsonLesson {
        let report = &file.report;
        JsonLesson {
            file: file.path.display().to_string(),
            passed: report.passed(),
            findings: report
                .findings
                .iter()
                .map(|f| JsonFinding {
                    rule_id: f.rule_id.0.clone(),
                    severity: f.severity.as_str(),
                    category: f.category.as_str(),
                    message: f.message.clone(),
                    location: f.location.clone(),
                    suggestion: f.suggestion.clone(),
                })
                .collect(),
            summary: JsonSummary {
                total: report.findings.len(),
                blocker: report.count(Severity::Blocker),
                critical: report.count(Severity::Critical),
                major: report.count(Severity::Major),
                minor: report.count(Severity::Minor),
            },
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            passed: reports.iter().all(FileReport::passed),
            lessons: reports.iter().map(Self::lesson).collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{Category, Finding, LintReport, RuleId};

    fn render(reports: &[FileReport]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(reports, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let report = LintReport::new(vec![Finding::new(
            RuleId::new("required-fields"),
            Severity::Critical,
            Category::Schema,
            "Missing required field: title",
        )]);

        let parsed = render(&[FileReport::new("lesson.json", report)]);

        assert_eq!(parsed["passed"], false);
        assert_eq!(parsed["lessons"][0]["file"], "lesson.json");
        assert_eq!(parsed["lessons"][0]["findings"][0]["severity"], "CRITICAL");
        assert_eq!(parsed["lessons"][0]["findings"][0]["category"], "Schema");
        assert_eq!(parsed["lessons"][0]["summary"]["total"], 1);
    }

    #[test]
    fn includes_location_when_present() {
        let report = LintReport::new(vec![Finding::new(
            RuleId::new("word-list"),
            Severity::Blocker,
            Category::Phonics,
            "msg",
        )
        .with_location("wordList[4]")]);

        let parsed = render(&[FileReport::new("lesson.json", report)]);

        assert_eq!(parsed["lessons"][0]["findings"][0]["location"], "wordList[4]");
    }

    #[test]
    fn omits_location_when_absent() {
        let report = LintReport::new(vec![Finding::new(
            RuleId::new("step-sequence"),
            Severity::Critical,
            Category::Structure,
            "msg",
        )]);

        let parsed = render(&[FileReport::new("lesson.json", report)]);

        assert!(parsed["lessons"][0]["findings"][0]["location"].is_null());
    }

    #[test]
    fn summary_counts_by_severity() {
        let finding = |severity| Finding::new(RuleId::new("r"), severity, Category::Phonics, "m");
        let report = LintReport::new(vec![
            finding(Severity::Blocker),
            finding(Severity::Blocker),
            finding(Severity::Major),
            finding(Severity::Minor),
        ]);

        let parsed = render(&[FileReport::new("lesson.json", report)]);

        let summary = &parsed["lessons"][0]["summary"];
        assert_eq!(summary["total"], 4);
        assert_eq!(summary["blocker"], 2);
        assert_eq!(summary["critical"], 0);
        assert_eq!(summary["major"], 1);
        assert_eq!(summary["minor"], 1);
    }

    #[test]
    fn batch_passes_only_when_every_lesson_passes() {
        let failing = LintReport::new(vec![Finding::new(
            RuleId::new("r"),
            Severity::Critical,
            Category::Schema,
            "m",
        )]);
        let reports = vec![
            FileReport::new("a.json", LintReport::new(vec![])),
            FileReport::new("b.json", failing),
        ];

        let parsed = render(&reports);

        assert_eq!(parsed["passed"], false);
        assert_eq!(parsed["lessons"][0]["passed"], true);
        assert_eq!(parsed["lessons"][1]["passed"], false);
    }

    #[test]
    fn empty_run_passes() {
        let parsed = render(&[]);

        assert_eq!(parsed["passed"], true);
        assert!(parsed["lessons"].as_array().unwrap().is_empty());
    }
}
