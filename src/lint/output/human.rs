//! Human-readable output formatter.
//!
//! Formats lint reports for terminal display with optional color support.
//! Findings are grouped by severity, most severe first, and each report
//! ends with a single verdict line.

use super::LintFormatter;
use crate::lint::{FileReport, Severity, Verdict};
use console::Style;
use std::io::Write;

const RULE: &str = "============================================================";

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn style(&self, style: Style) -> Style {
        if self.use_color {
            style.force_styling(true)
        } else {
            Style::new()
        }
    }

    fn severity_style(&self, severity: Severity) -> Style {
        self.style(match severity {
            Severity::Blocker | Severity::Critical => Style::new().red().bold(),
            Severity::Major => Style::new().yellow(),
            Severity::Minor => Style::new().dim(),
        })
    }

    fn verdict_line(&self, verdict: Verdict) -> String {
        match verdict {
            Verdict::Pass => format!("{}", self.style(Style::new().green()).apply_to("✓ PASS")),
            Verdict::Fail => format!(
                "{}",
                self.style(Style::new().red().bold()).apply_to("✗ FAIL")
            ),
        }
    }

    fn format_report<W: Write>(&self, file: &FileReport, writer: &mut W) -> std::io::Result<()> {
        let report = &file.report;

        writeln!(writer)?;
        writeln!(writer, "{}", RULE)?;
        writeln!(writer, "LINT REPORT: {}", file.path.display())?;
        writeln!(writer, "{}", RULE)?;

        if report.findings.is_empty() {
            writeln!(
                writer,
                "{}",
                self.style(Style::new().green()).apply_to("✓ No issues found!")
            )?;
        }

        for severity in Severity::DESCENDING {
            let count = report.count(severity);
            if count == 0 {
                continue;
            }

            writeln!(writer)?;
            writeln!(
                writer,
                "{}",
                self.severity_style(severity)
                    .apply_to(format!("{} ({}):", severity, count))
            )?;
            for finding in report.with_severity(severity) {
                writeln!(writer, "  • {}", finding)?;
                if let Some(ref suggestion) = finding.suggestion {
                    writeln!(writer, "    = help: {}", suggestion)?;
                }
            }
        }

        writeln!(writer)?;
        writeln!(writer, "{}", RULE)?;
        writeln!(writer, "VERDICT: {}", self.verdict_line(report.verdict))?;
        writeln!(writer, "{}", RULE)?;
        Ok(())
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            self.format_report(report, writer)?;
        }

        // Batch summary
        if reports.len() > 1 {
            let failed = reports.iter().filter(|r| !r.passed()).count();
            writeln!(writer)?;
            writeln!(
                writer,
                "{} lesson(s) checked, {} failed",
                reports.len(),
                failed
            )?;
        }

        Ok(())
    }
}
