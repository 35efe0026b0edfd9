//! Check command implementation.
//!
//! The `lesson-lint check` command lints one lesson file, or with `--all`
//! every lesson found under a lessons directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::config::{discover_config, LintConfig};
use crate::error::{LessonLintError, Result};
use crate::lint::{
    FileReport, HumanFormatter, JsonFormatter, LintFormatter, Linter, OutputFormat,
    SarifFormatter,
};
use crate::loader::{lint_directory, lint_lesson_file};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Exit code for usage problems: bad lessons directory or config file.
const EXIT_USAGE: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(working_dir: &Path, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Use an explicit config file instead of discovering one.
    pub fn with_config(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Load the config file and apply CLI overrides.
    fn effective_config(&self) -> Result<LintConfig> {
        let explicit = self.config_path.as_deref().map(|p| self.resolve(p));
        let mut config = discover_config(explicit.as_deref(), &self.working_dir)?;

        if self.args.strict {
            config.strict = true;
        }
        if let Some(ref format) = self.args.format {
            config.format = *format;
        }
        if let Some(ref lesson_file) = self.args.lesson_file {
            config.lesson_file = lesson_file.clone();
        }
        Ok(config)
    }

    /// Show report paths the way the user wrote them.
    fn relabel(&self, reports: &mut [FileReport], resolved: &Path) {
        for file in reports {
            if let Ok(rest) = file.path.strip_prefix(resolved) {
                file.path = if rest.as_os_str().is_empty() {
                    self.args.path.clone()
                } else {
                    self.args.path.join(rest)
                };
            }
        }
    }

    fn format_output(
        &self,
        format: OutputFormat,
        reports: &[FileReport],
        linter: &Linter,
        color: bool,
    ) -> String {
        let mut output = Vec::new();

        match format {
            OutputFormat::Json => {
                JsonFormatter::new().format(reports, &mut output).ok();
            }
            OutputFormat::Sarif => {
                let formatter = SarifFormatter::new("lesson-lint", env!("CARGO_PKG_VERSION"))
                    .with_rules(linter.registry());
                formatter.format(reports, &mut output).ok();
            }
            OutputFormat::Human => {
                HumanFormatter::new(color).format(reports, &mut output).ok();
            }
        }

        String::from_utf8_lossy(&output).into_owned()
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.effective_config() {
            Ok(c) => c,
            Err(
                e @ (LessonLintError::ConfigNotFound { .. }
                | LessonLintError::ConfigParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_USAGE));
            }
            Err(e) => return Err(e),
        };
        debug!("Effective config: {:?}", config);

        let linter = config.linter();
        let target = self.resolve(&self.args.path);

        let mut reports = if self.args.all {
            match lint_directory(&target, &config.lesson_file, &linter) {
                Ok(batch) => batch.reports,
                Err(e @ LessonLintError::NotADirectory { .. }) => {
                    ui.error(&e.to_string());
                    return Ok(CommandResult::failure(EXIT_USAGE));
                }
                Err(e) => return Err(e),
            }
        } else {
            vec![lint_lesson_file(&target, &linter)]
        };
        self.relabel(&mut reports, &target);

        if reports.is_empty() {
            ui.warning(&format!(
                "No lessons found in {} (looked for */{})",
                self.args.path.display(),
                config.lesson_file
            ));
        }

        let all_passed = reports.iter().all(FileReport::passed);

        let shown: Vec<FileReport> =
            if config.format == OutputFormat::Human && ui.output_mode() == OutputMode::Quiet {
                reports.into_iter().filter(|r| !r.passed()).collect()
            } else {
                reports
            };

        if !(shown.is_empty() && config.format == OutputFormat::Human) {
            let output = self.format_output(config.format, &shown, &linter, ui.use_color());
            ui.report(&output);
        }

        if all_passed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
