//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// lesson-lint - Validate lesson documents before they are published.
#[derive(Debug, Parser)]
#[command(name = "lesson-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .lesson-lint.yml in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only print reports for failing lessons
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint a lesson file, or every lesson under a directory with --all
    Check(CheckArgs),

    /// List the lint rules in execution order
    Rules,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Lesson file, or lessons directory with --all
    pub path: PathBuf,

    /// Lint every lesson in the subdirectories of PATH
    #[arg(long)]
    pub all: bool,

    /// Output format [default: human]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fail lessons on MAJOR findings too
    #[arg(long)]
    pub strict: bool,

    /// Lesson file name looked up in each directory with --all [default: lesson.json]
    #[arg(long, value_name = "NAME")]
    pub lesson_file: Option<String>,
}

impl CheckArgs {
    /// Arguments for checking a single path with all defaults.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            all: false,
            format: None,
            strict: false,
            lesson_file: None,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_flags() {
        let cli = Cli::try_parse_from([
            "lesson-lint",
            "check",
            "lessons",
            "--all",
            "--format",
            "json",
            "--strict",
            "--lesson-file",
            "lesson.yml",
        ])
        .unwrap();

        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.path, PathBuf::from("lessons"));
                assert!(args.all);
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert!(args.strict);
                assert_eq!(args.lesson_file.as_deref(), Some("lesson.yml"));
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lesson-lint", "check", "l.json", "-q", "--no-color"])
            .unwrap();

        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["lesson-lint", "check", "l.json", "--format", "xml"]);

        assert!(result.is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["lesson-lint"]).is_err());
    }
}
