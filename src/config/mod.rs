//! Linter configuration.
//!
//! lesson-lint works without any configuration. An optional YAML file
//! (`.lesson-lint.yml` in the working directory, or the file given with
//! `--config`) can extend the forbidden keyword list and set defaults for
//! command-line options.
//!
//! # Example
//!
//! ```yaml
//! strict: false
//! lesson_file: lesson.json
//! format: human
//! extra_forbidden_keywords:
//!   - trophy
//! ```

pub mod loader;
pub mod schema;

pub use loader::{discover_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::LintConfig;
