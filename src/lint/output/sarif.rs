//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub, VS Code, and other tools.
//! Lesson findings point into the document by path (`wordList[3]`), so they
//! are reported as logical locations rather than line regions.

use super::LintFormatter;
use crate::lint::{FileReport, RuleId, RuleRegistry, Severity};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

const LOAD_RULE_DESCRIPTION: &str = "Lesson file exists and can be decoded";

/// Formats lint output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
    /// Rule descriptions by rule ID.
    descriptions: BTreeMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLogicalLocation {
    fully_qualified_name: String,
}

impl SarifFormatter {
    /// Create a new SARIF formatter describing the built-in rules.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            descriptions: BTreeMap::new(),
        }
        .with_rules(&RuleRegistry::with_builtins())
    }

    /// Describe rules from `registry`, the one that produced the findings.
    pub fn with_rules(mut self, registry: &RuleRegistry) -> Self {
        self.descriptions = registry
            .iter()
            .map(|r| (r.id().0, r.description().to_string()))
            .collect();
        self.descriptions
            .insert(RuleId::load().0, LOAD_RULE_DESCRIPTION.to_string());
        self
    }

    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Blocker | Severity::Critical => "error",
            Severity::Major => "warning",
            Severity::Minor => "note",
        }
    }

    fn rule_description(&self, id: &str) -> String {
        self.descriptions
            .get(id)
            .cloned()
            .unwrap_or_else(|| format!("Rule {}", id))
    }
}

impl LintFormatter for SarifFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        // Collect unique rule IDs
        let rule_ids: BTreeSet<&str> = reports
            .iter()
            .flat_map(|r| r.report.findings.iter())
            .map(|f| f.rule_id.0.as_str())
            .collect();

        let rules: Vec<_> = rule_ids
            .into_iter()
            .map(|id| SarifRule {
                id: id.to_string(),
                short_description: SarifMessage {
                    text: self.rule_description(id),
                },
            })
            .collect();

        let results: Vec<_> = reports
            .iter()
            .flat_map(|file| {
                let uri = file.path.display().to_string();
                file.report.findings.iter().map(move |f| SarifResult {
                    rule_id: f.rule_id.0.clone(),
                    level: Self::severity_to_level(f.severity),
                    message: SarifMessage {
                        text: f.message.clone(),
                    },
                    locations: vec![SarifLocation {
                        physical_location: SarifPhysicalLocation {
                            artifact_location: SarifArtifactLocation { uri: uri.clone() },
                        },
                        logical_locations: f
                            .location
                            .iter()
                            .map(|l| SarifLogicalLocation {
                                fully_qualified_name: l.clone(),
                            })
                            .collect(),
                    }],
                })
            })
            .collect();

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
