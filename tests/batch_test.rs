//! Integration tests for directory processing, evaluation and ranking.

mod common;

use std::fs;
use std::path::Path;

use common::{build_pdf, report_pdf, BOLD, REGULAR};
use pdf_outline::render::{read_outline, write_outline};
use pdf_outline::{
    evaluate_directory, evaluate_pair, process_directory, rank_files, BatchOptions, Error,
    HeadingLevel, JsonFormat, LexicalScorer, OutlineDocument, OutlineNode, Outliner,
};

fn write_inputs(dir: &Path) {
    fs::write(dir.join("report.pdf"), report_pdf()).unwrap();
    fs::write(
        dir.join("Memo.PDF"),
        build_pdf(&[vec![(BOLD, 20, "Staff Memo"), (REGULAR, 10, "Office closes early.")]]),
    )
    .unwrap();
    fs::write(dir.join("readme.txt"), "not an input").unwrap();
}

#[test]
fn test_process_directory_writes_one_json_per_pdf() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_inputs(input.path());

    for options in [BatchOptions::default(), BatchOptions::new().sequential()] {
        let report = process_directory(input.path(), output.path(), &Outliner::new(), &options)
            .unwrap();

        assert!(report.is_success());
        let names: Vec<String> = report
            .written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Memo.json", "report.json"]);
    }

    let memo = read_outline(output.path().join("Memo.json")).unwrap();
    assert_eq!(memo.title, "Staff Memo");
    let report = read_outline(output.path().join("report.json")).unwrap();
    assert_eq!(report.total_headings(), 4);
}

#[test]
fn test_process_directory_compact_output() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_inputs(input.path());

    let options = BatchOptions::new().with_json_format(JsonFormat::Compact);
    process_directory(input.path(), output.path(), &Outliner::new(), &options).unwrap();

    let json = fs::read_to_string(output.path().join("report.json")).unwrap();
    assert!(!json.contains('\n'));
}

#[test]
fn test_bad_pdf_does_not_stop_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_inputs(input.path());
    fs::write(input.path().join("corrupt.pdf"), b"%PDF-1.7\n\x00\x01garbage").unwrap();

    let report = process_directory(
        input.path(),
        output.path(),
        &Outliner::new(),
        &BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].0.ends_with("corrupt.pdf"));
    assert!(!output.path().join("corrupt.json").exists());
}

#[test]
fn test_same_stem_keeps_first_outline() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("a.pdf"), report_pdf()).unwrap();
    fs::write(
        input.path().join("a.PDF"),
        build_pdf(&[vec![(BOLD, 20, "Staff Memo"), (REGULAR, 10, "Office closes early.")]]),
    )
    .unwrap();
    if fs::read_dir(input.path()).unwrap().count() < 2 {
        // case-insensitive file system
        return;
    }

    let report = process_directory(
        input.path(),
        output.path(),
        &Outliner::new(),
        &BatchOptions::default(),
    )
    .unwrap();

    // a.PDF sorts first and owns a.json
    assert_eq!(report.written, vec![output.path().join("a.json")]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].0.ends_with("a.pdf"));
    let doc = read_outline(output.path().join("a.json")).unwrap();
    assert_eq!(doc.title, "Staff Memo");
}

// ==================== Evaluation ====================

fn node(level: HeadingLevel, text: &str, page: u32) -> OutlineNode {
    OutlineNode::new(level, text, page)
}

#[test]
fn test_evaluate_directory() {
    let pred = tempfile::tempdir().unwrap();
    let gt = tempfile::tempdir().unwrap();

    // a.json: P = 1/2, R = 1/1
    let a_pred = OutlineDocument::new(
        "A",
        vec![node(HeadingLevel::H1, "Intro", 1), node(HeadingLevel::H1, "Extra", 2)],
    );
    let a_gt = OutlineDocument::new("A", vec![node(HeadingLevel::H1, "Intro", 1)]);
    write_outline(pred.path().join("a.json"), &a_pred, JsonFormat::Pretty).unwrap();
    write_outline(gt.path().join("a.json"), &a_gt, JsonFormat::Pretty).unwrap();

    // b.json: exact match
    write_outline(pred.path().join("b.json"), &a_gt, JsonFormat::Pretty).unwrap();
    write_outline(gt.path().join("b.json"), &a_gt, JsonFormat::Pretty).unwrap();

    // c.json: no ground truth
    write_outline(pred.path().join("c.json"), &a_gt, JsonFormat::Pretty).unwrap();

    // d.json: unreadable ground truth
    write_outline(pred.path().join("d.json"), &a_gt, JsonFormat::Pretty).unwrap();
    fs::write(gt.path().join("d.json"), "{ broken").unwrap();

    let report = evaluate_directory(pred.path(), gt.path()).unwrap();

    let names: Vec<&str> = report.documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a.json", "b.json"]);
    assert_eq!(report.documents[0].result.precision, 0.5);
    assert_eq!(report.documents[0].result.recall, 1.0);
    assert_eq!(report.skipped, vec!["c.json".to_string()]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, "d.json");

    let avg = report.average().unwrap();
    assert!((avg.precision - 0.75).abs() < 1e-9);
    assert_eq!(avg.recall, 1.0);
}

#[test]
fn test_evaluate_directory_without_matches() {
    let pred = tempfile::tempdir().unwrap();
    let gt = tempfile::tempdir().unwrap();
    let doc = OutlineDocument::new("X", vec![]);
    write_outline(pred.path().join("x.json"), &doc, JsonFormat::Pretty).unwrap();

    let report = evaluate_directory(pred.path(), gt.path()).unwrap();
    assert!(report.documents.is_empty());
    assert!(report.average().is_none());
}

#[test]
fn test_extracted_outline_scores_perfectly_against_itself() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let doc = Outliner::new()
        .extract_bytes(&report_pdf(), "report.pdf")
        .unwrap();
    write_outline(&path, &doc, JsonFormat::Pretty).unwrap();

    let result = evaluate_pair(&path, &path).unwrap();
    assert_eq!(result.f1, 1.0);
}

#[test]
fn test_ground_truth_read_leniently() {
    let dir = tempfile::tempdir().unwrap();
    let gt = dir.path().join("gt.json");
    let pred = dir.path().join("pred.json");
    fs::write(
        &gt,
        r#"{"outline": [{"level": "H1", "text": "Intro", "page": 1}]}"#,
    )
    .unwrap();
    let doc = OutlineDocument::new("Intro", vec![node(HeadingLevel::H1, "Intro", 1)]);
    write_outline(&pred, &doc, JsonFormat::Compact).unwrap();

    let result = evaluate_pair(&pred, &gt).unwrap();
    assert_eq!(result.precision, 1.0);
}

// ==================== Ranking ====================

#[test]
fn test_rank_extracted_outline() {
    let dir = tempfile::tempdir().unwrap();
    let headings = dir.path().join("report.json");
    let persona = dir.path().join("persona.json");

    let doc = Outliner::new()
        .extract_bytes(&report_pdf(), "report.pdf")
        .unwrap();
    write_outline(&headings, &doc, JsonFormat::Pretty).unwrap();
    fs::write(&persona, r#"{"persona": "Analyst studying regional revenue"}"#).unwrap();

    let ranked = rank_files(&headings, &persona, &LexicalScorer::new()).unwrap();
    assert_eq!(ranked.len(), 4);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(ranked[0].text == "Revenue" || ranked[0].text == "Regional Breakdown");
    assert!(ranked.iter().any(|h| h.text == "Outlook" && h.score == 0.0));
}

#[test]
fn test_rank_missing_persona_file() {
    let dir = tempfile::tempdir().unwrap();
    let headings = dir.path().join("report.json");
    write_outline(&headings, &OutlineDocument::default(), JsonFormat::Pretty).unwrap();

    let err = rank_files(&headings, dir.path().join("persona.json"), &LexicalScorer::new())
        .unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
}
