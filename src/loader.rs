//! Lesson file loading and discovery.
//!
//! The lint engine only sees decoded documents. This module reads lesson
//! files, turns load failures into a single BLOCKER finding, and walks a
//! lessons directory for batch runs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{LessonLintError, Result};
use crate::lesson::LessonDocument;
use crate::lint::{Category, FileReport, Finding, Linter, RuleId, Severity};

/// Load and decode a lesson file.
///
/// Files ending in `.yml` or `.yaml` are decoded as YAML, everything else
/// as JSON.
///
/// # Errors
///
/// Returns `LessonNotFound` if the file doesn't exist.
/// Returns `LessonParseError` if the file cannot be decoded.
pub fn load_lesson(path: &Path) -> Result<LessonDocument> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LessonLintError::LessonNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LessonLintError::Io(e)
        }
    })?;

    if is_yaml(path) {
        LessonDocument::from_yaml_str(&content).map_err(|e| LessonLintError::LessonParseError {
            path: path.to_path_buf(),
            message: format!("Invalid YAML: {}", e),
        })
    } else {
        LessonDocument::from_json_str(&content).map_err(|e| LessonLintError::LessonParseError {
            path: path.to_path_buf(),
            message: format!("Invalid JSON: {}", e),
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}

/// The BLOCKER finding reported in place of lint results when a lesson
/// cannot be loaded.
pub fn load_failure_finding(err: &LessonLintError) -> Finding {
    let (category, message) = match err {
        LessonLintError::LessonNotFound { path } => {
            (Category::File, format!("File not found: {}", path.display()))
        }
        LessonLintError::LessonParseError { message, .. } => (Category::Schema, message.clone()),
        other => (Category::File, other.to_string()),
    };

    Finding::new(RuleId::load(), Severity::Blocker, category, message)
}

/// Load and lint one lesson file.
///
/// Never fails: a file that cannot be loaded yields a failing report with
/// a single BLOCKER finding and no rule results.
pub fn lint_lesson_file(path: &Path, linter: &Linter) -> FileReport {
    debug!("Linting {}", path.display());
    let report = match load_lesson(path) {
        Ok(doc) => linter.lint(&doc),
        Err(e) => {
            debug!("Failed to load {}: {}", path.display(), e);
            linter.load_failure(load_failure_finding(&e))
        }
    };
    FileReport::new(path, report)
}

/// Find lesson files under a lessons directory.
///
/// Looks in each immediate subdirectory of `dir`, sorted by name, for a
/// file called `lesson_file`. Subdirectories without one are skipped.
///
/// # Errors
///
/// Returns `NotADirectory` if `dir` is not a directory.
pub fn discover_lessons(dir: &Path, lesson_file: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LessonLintError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut lesson_dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            lesson_dirs.push(path);
        }
    }
    lesson_dirs.sort();

    let lessons: Vec<PathBuf> = lesson_dirs
        .into_iter()
        .map(|d| d.join(lesson_file))
        .filter(|p| p.is_file())
        .collect();

    info!("Found {} lesson(s) in {}", lessons.len(), dir.display());
    Ok(lessons)
}

/// Reports for every lesson of a batch run, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One report per lesson file.
    pub reports: Vec<FileReport>,
}

impl BatchReport {
    /// Whether every lesson passed. An empty batch passes.
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(FileReport::passed)
    }

    /// Number of lessons that failed.
    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| !r.passed()).count()
    }
}

/// Lint every lesson found under `dir`.
///
/// Each lesson is linted independently; one bad file does not stop the
/// batch.
pub fn lint_directory(dir: &Path, lesson_file: &str, linter: &Linter) -> Result<BatchReport> {
    let reports = discover_lessons(dir, lesson_file)?
        .iter()
        .map(|path| lint_lesson_file(path, linter))
        .collect();

    Ok(BatchReport { reports })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Verdict;
    use tempfile::TempDir;

    const VALID_LESSON: &str = r#"{
        "lessonId": "L01",
        "version": "1.0.0",
        "title": "Short a",
        "graphemeConstraints": {
            "allowedGraphemes": ["c", "a", "t"],
            "bannedGraphemes": ["x"]
        },
        "wordList": [{ "word": "cat" }],
        "steps": [{ "type": "review" }, { "type": "completion" }]
    }"#;

    fn write_lesson(dir: &Path, name: &str, content: &str) -> PathBuf {
        let lesson_dir = dir.join(name);
        fs::create_dir_all(&lesson_dir).unwrap();
        let path = lesson_dir.join("lesson.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_json_lesson() {
        let temp = TempDir::new().unwrap();
        let path = write_lesson(temp.path(), "l01", VALID_LESSON);

        let doc = load_lesson(&path).unwrap();

        assert_eq!(doc.title(), "Short a");
    }

    #[test]
    fn loads_yaml_lesson() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lesson.yaml");
        fs::write(&path, "lessonId: L01\ntitle: Short a\nsteps: []\n").unwrap();

        let doc = load_lesson(&path).unwrap();

        assert!(doc.has_field("steps"));
        assert_eq!(doc.title(), "Short a");
    }

    #[test]
    fn missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();

        let result = load_lesson(&temp.path().join("missing.json"));

        assert!(matches!(result, Err(LessonLintError::LessonNotFound { .. })));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_lesson(temp.path(), "l01", "{ \"title\": ");

        let result = load_lesson(&path);

        match result {
            Err(LessonLintError::LessonParseError { message, .. }) => {
                assert!(message.starts_with("Invalid JSON: "))
            }
            other => panic!("expected LessonParseError, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_yields_single_file_blocker() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let file = lint_lesson_file(&path, &Linter::default());

        assert_eq!(file.report.verdict, Verdict::Fail);
        assert_eq!(file.report.findings.len(), 1);
        let finding = &file.report.findings[0];
        assert_eq!(finding.severity, Severity::Blocker);
        assert_eq!(finding.category, Category::File);
        assert!(finding.message.starts_with("File not found: "));
    }

    #[test]
    fn malformed_file_yields_single_schema_blocker() {
        let temp = TempDir::new().unwrap();
        let path = write_lesson(temp.path(), "l01", "not json at all");

        let file = lint_lesson_file(&path, &Linter::default());

        assert_eq!(file.report.findings.len(), 1);
        assert_eq!(file.report.findings[0].category, Category::Schema);
        assert!(file.report.findings[0].message.starts_with("Invalid JSON"));
        assert!(!file.passed());
    }

    #[test]
    fn valid_file_is_linted() {
        let temp = TempDir::new().unwrap();
        let path = write_lesson(temp.path(), "l01", VALID_LESSON);

        let file = lint_lesson_file(&path, &Linter::default());

        assert!(file.passed(), "{:?}", file.report.findings);
        assert_eq!(file.path, path);
    }

    #[test]
    fn discovers_lessons_in_sorted_subdirectories() {
        let temp = TempDir::new().unwrap();
        write_lesson(temp.path(), "lesson-02", VALID_LESSON);
        write_lesson(temp.path(), "lesson-01", VALID_LESSON);
        fs::create_dir_all(temp.path().join("lesson-03")).unwrap();
        fs::write(temp.path().join("lesson.json"), VALID_LESSON).unwrap();

        let lessons = discover_lessons(temp.path(), "lesson.json").unwrap();

        assert_eq!(
            lessons,
            vec![
                temp.path().join("lesson-01").join("lesson.json"),
                temp.path().join("lesson-02").join("lesson.json"),
            ]
        );
    }

    #[test]
    fn discover_rejects_files() {
        let temp = TempDir::new().unwrap();
        let path = write_lesson(temp.path(), "l01", VALID_LESSON);

        let result = discover_lessons(&path, "lesson.json");

        assert!(matches!(result, Err(LessonLintError::NotADirectory { .. })));
    }

    #[test]
    fn batch_fails_if_any_lesson_fails() {
        let temp = TempDir::new().unwrap();
        write_lesson(temp.path(), "l01", VALID_LESSON);
        write_lesson(temp.path(), "l02", "{}");

        let batch = lint_directory(temp.path(), "lesson.json", &Linter::default()).unwrap();

        assert_eq!(batch.reports.len(), 2);
        assert!(batch.reports[0].passed());
        assert!(!batch.reports[1].passed());
        assert_eq!(batch.failed(), 1);
        assert!(!batch.all_passed());
    }

    #[test]
    fn empty_batch_passes() {
        let temp = TempDir::new().unwrap();

        let batch = lint_directory(temp.path(), "lesson.json", &Linter::default()).unwrap();

        assert!(batch.reports.is_empty());
        assert!(batch.all_passed());
    }
}
