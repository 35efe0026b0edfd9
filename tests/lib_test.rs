//! Library integration tests.

use std::fs;

use lesson_lint::config::parse_config;
use lesson_lint::lesson::LessonDocument;
use lesson_lint::lint::{
    Category, JsonFormatter, LintFormatter, Linter, RuleId, Severity, Verdict,
};
use lesson_lint::loader::{lint_directory, lint_lesson_file};
use lesson_lint::LessonLintError;
use serde_json::json;
use tempfile::TempDir;

fn lesson(overrides: serde_json::Value) -> LessonDocument {
    let mut base = json!({
        "lessonId": "L07",
        "version": "1.2.0",
        "title": "The short a sound",
        "graphemeConstraints": {
            "allowedGraphemes": ["c", "a", "t", "s", "m", "p"],
            "bannedGraphemes": ["sh", "x"],
            "sightWords": ["the", "I"]
        },
        "wordList": [{ "word": "cat" }, { "word": "map" }],
        "decodableText": { "sentences": [{ "text": "I tap the cat." }, { "text": "Sam sat." }] },
        "steps": [
            { "type": "introduction", "title": "Listen", "instruction": "Say the sound" },
            { "type": "practice", "content": { "displayText": "cat", "completionMessage": "Done" } },
            { "type": "completion" }
        ]
    });
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in overrides {
            base.insert(k.clone(), v.clone());
        }
    }
    LessonDocument::new(base)
}

#[test]
fn error_types_are_public() {
    let err = LessonLintError::NotADirectory {
        path: "lessons".into(),
    };
    assert!(err.to_string().contains("lessons"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> lesson_lint::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn well_formed_lesson_has_no_findings() {
    let report = Linter::default().lint(&lesson(json!({})));

    assert!(report.findings.is_empty(), "{:?}", report.findings);
    assert_eq!(report.verdict, Verdict::Pass);
}

#[test]
fn fixture_sentences_are_read_as_text_objects() {
    let doc = lesson(json!({}));

    let sentences = doc.decodable_text().unwrap().sentences();

    assert_eq!(sentences, vec!["I tap the cat.", "Sam sat."]);
}

#[test]
fn sight_words_bypass_phonics_in_word_list_and_text() {
    let report = Linter::default().lint(&lesson(json!({
        "wordList": [{ "word": "THE" }],
        "decodableText": { "sentences": [{ "text": "The cat." }] }
    })));

    assert!(report.findings.is_empty(), "{:?}", report.findings);
}

#[test]
fn decodable_text_reports_undecodable_words() {
    let report = Linter::default().lint(&lesson(json!({
        "decodableText": { "sentences": [{ "text": "Sam sat." }, { "text": "The dog sat." }] }
    })));

    assert_eq!(report.findings.len(), 1);
    let finding = &report.findings[0];
    assert_eq!(finding.severity, Severity::Blocker);
    assert_eq!(finding.category, Category::Phonics);
    assert_eq!(
        finding.message,
        "Word 'dog' contains grapheme 'd' not in allowedGraphemes"
    );
    assert_eq!(finding.location.as_deref(), Some("decodableText.sentences[1]"));
}

#[test]
fn banned_grapheme_stops_checking_the_word() {
    let report = Linter::default().lint(&lesson(json!({
        "wordList": [{ "word": "xyz" }]
    })));

    let blockers: Vec<_> = report.with_severity(Severity::Blocker).collect();
    assert_eq!(blockers.len(), 1);
    assert_eq!(
        blockers[0].message,
        "Word 'xyz' contains banned grapheme 'x'"
    );
}

#[test]
fn calm_design_scans_learner_facing_text() {
    let report = Linter::default().lint(&lesson(json!({
        "audioAssets": [{ "transcript": "Great job! You unlocked a new badge!" }]
    })));

    let messages: Vec<&str> = report
        .findings
        .iter()
        .map(|f| f.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Forbidden keyword found: 'unlock'",
            "Forbidden keyword found: 'badge'",
        ]
    );
    assert_eq!(report.verdict, Verdict::Fail);
}

#[test]
fn findings_follow_rule_order() {
    let doc = LessonDocument::new(json!({
        "title": "Win the best prize",
        "graphemeConstraints": { "allowedGraphemes": ["a"] },
        "wordList": [{ "word": "b" }],
        "steps": [{ "type": "practice" }]
    }));

    let report = Linter::default().lint(&doc);

    let rules: Vec<&str> = report.findings.iter().map(|f| f.rule_id.0.as_str()).collect();
    let mut deduped = rules.clone();
    deduped.dedup();
    assert_eq!(
        deduped,
        vec![
            "required-fields",
            "grapheme-constraints",
            "word-list",
            "calm-design",
            "step-sequence",
        ]
    );
}

#[test]
fn config_driven_linter() {
    let config = parse_config(
        "strict: true\nextra_forbidden_keywords: [sticker]\n",
        std::path::Path::new("cfg.yml"),
    )
    .unwrap();
    let linter = config.linter();

    let report = linter.lint(&lesson(json!({ "title": "A sticker for Sam" })));

    assert!(report
        .findings
        .iter()
        .any(|f| f.rule_id == RuleId::new("calm-design") && f.message.contains("sticker")));
    assert_eq!(report.verdict, Verdict::Fail);
}

#[test]
fn batch_run_over_lessons_directory() {
    let temp = TempDir::new().unwrap();
    for (dir, title) in [("01-short-a", "Short a"), ("02-short-i", "Hurry up")] {
        let path = temp.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        let mut doc = lesson(json!({})).root().clone();
        doc["title"] = json!(title);
        fs::write(path.join("lesson.json"), doc.to_string()).unwrap();
    }

    let batch = lint_directory(temp.path(), "lesson.json", &Linter::default()).unwrap();

    assert_eq!(batch.reports.len(), 2);
    assert!(batch.reports[0].passed());
    assert!(!batch.reports[1].passed());
    assert_eq!(batch.failed(), 1);
}

#[test]
fn json_report_for_a_missing_file() {
    let temp = TempDir::new().unwrap();
    let file = lint_lesson_file(&temp.path().join("gone.json"), &Linter::default());

    let mut output = Vec::new();
    JsonFormatter::new().format(&[file], &mut output).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(parsed["passed"], false);
    let finding = &parsed["lessons"][0]["findings"][0];
    assert_eq!(finding["severity"], "BLOCKER");
    assert_eq!(parsed["lessons"][0]["summary"]["blocker"], 1);
}
