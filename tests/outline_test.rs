//! Integration tests for outline extraction.

mod common;

use std::fs;

use common::{build_pdf, report_pdf, BOLD, REGULAR};
use pdf_outline::outline::{assemble, detect_headings, HeadingClassifier};
use pdf_outline::{
    build_outline, extract_outline, extract_outline_bytes, extract_spans, flatten_outline,
    Error, HeadingCandidate, HeadingLevel, OutlineConfig, Outliner, PageSelection,
    ParseOptions, SizeProfile, Span,
};

#[test]
fn test_extract_report_outline() {
    let doc = extract_outline_bytes(&report_pdf(), "report.pdf").unwrap();

    assert_eq!(doc.title, "Annual Report");
    assert_eq!(doc.outline.len(), 1);

    let root = &doc.outline[0];
    assert_eq!(root.level, HeadingLevel::H1);
    assert_eq!(root.page, 1);

    let sections: Vec<&str> = root.children.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(sections, vec!["Revenue", "Outlook"]);
    assert_eq!(root.children[0].children[0].text, "Regional Breakdown");
    assert_eq!(root.children[0].children[0].page, 2);
    assert_eq!(root.children[1].page, 2);
    assert_eq!(doc.total_headings(), 4);
}

#[test]
fn test_extract_from_file_uses_file_name_as_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minutes.pdf");
    // only regular text: no H2/H3 (not bold) and the H1 line is a page number
    fs::write(
        &path,
        build_pdf(&[vec![(REGULAR, 20, "42"), (REGULAR, 11, "Attendees were present.")]]),
    )
    .unwrap();

    let doc = extract_outline(&path).unwrap();
    assert_eq!(doc.title, "minutes.pdf");
    assert!(doc.is_empty());
}

#[test]
fn test_page_selection_limits_outline() {
    let doc = Outliner::new()
        .with_pages(PageSelection::Single(2))
        .extract_bytes(&report_pdf(), "report.pdf")
        .unwrap();

    // page 2 alone: 18 becomes the top size
    assert_eq!(doc.title, "Outlook");
    let texts: Vec<String> = flatten_outline(&doc.outline)
        .into_iter()
        .map(|h| h.text)
        .collect();
    assert_eq!(texts, vec!["Regional Breakdown", "Outlook"]);
}

#[test]
fn test_extract_spans_reads_font_style() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spans.pdf");
    fs::write(
        &path,
        build_pdf(&[vec![(BOLD, 16, "Heading"), (REGULAR, 10, "body")]]),
    )
    .unwrap();

    let spans = extract_spans(&path, ParseOptions::default()).unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].text, "Heading");
    assert_eq!(spans[0].size, 16.0);
    assert!(spans[0].is_bold);
    assert_eq!(spans[1].font_name, "Helvetica");
    assert!(!spans[1].is_bold);
}

#[test]
fn test_non_pdf_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.pdf");
    fs::write(&path, "just some notes").unwrap();

    assert!(matches!(extract_outline(&path), Err(Error::UnknownFormat)));
}

#[test]
fn test_weighted_outliner_promotes_caps() {
    let spans = vec![
        Span::new("Title", 24.0, "Arial", 1),
        Span::new("NOTES", 21.8, "Arial", 1),
        Span::new("Chapter", 18.0, "Arial-Bold", 1),
        Span::new("body text", 10.0, "Arial", 1),
    ];

    // 21.8 is far from the H1 size and not bold
    let plain = Outliner::new().build_from_spans(&spans, "x.pdf");
    assert_eq!(plain.total_headings(), 2);
    assert_eq!(plain.outline.len(), 1);

    // the caps boost scales it to 23.98, within tolerance of H1
    let weighted = Outliner::new().weighted().build_from_spans(&spans, "x.pdf");
    assert_eq!(weighted.total_headings(), 3);
    assert_eq!(weighted.title, "Title");
    assert_eq!(weighted.outline[1].text, "NOTES");
    assert_eq!(weighted.outline[1].children[0].text, "Chapter");
}

// ==================== Property Tests ====================

fn sample_spans() -> Vec<Span> {
    let mut spans = Vec::new();
    let sizes = [26.0, 20.0, 15.0, 11.0, 9.0];
    for page in 1..=4 {
        for (i, size) in sizes.iter().enumerate() {
            let font = if i % 2 == 0 { "Times-Bold" } else { "Times-Roman" };
            spans.push(Span::new(format!("Line {} {}", page, i), *size, font, page));
        }
    }
    spans
}

#[test]
fn test_profile_thresholds_are_monotonic() {
    let config = OutlineConfig::default();
    for spans in [sample_spans(), sample_spans()[..2].to_vec(), Vec::new()] {
        let profile = SizeProfile::from_spans(&spans, &config);
        assert!(profile.h1_size >= profile.h2_size);
        assert!(profile.h2_size >= profile.h3_size);
    }
}

#[test]
fn test_every_candidate_appears_once_in_hierarchy() {
    let config = OutlineConfig::default();
    let spans = sample_spans();
    let profile = SizeProfile::from_spans(&spans, &config);
    let candidates = detect_headings(&spans, &profile, &config);
    assert!(!candidates.is_empty());

    let outline = assemble(candidates.clone());
    let flat = flatten_outline(&outline);
    assert_eq!(flat.len(), candidates.len());
    for (heading, candidate) in flat.iter().zip(&candidates) {
        assert_eq!(heading.text, candidate.text);
        assert_eq!(heading.level, candidate.level);
    }
}

#[test]
fn test_classifier_levels_require_bold_below_h1() {
    let config = OutlineConfig::default();
    let profile = SizeProfile::new(20.0, 16.0, 12.0);
    let classifier = HeadingClassifier::new(&profile, &config);

    assert_eq!(classifier.level_for(20.0, false), Some(HeadingLevel::H1));
    assert_eq!(classifier.level_for(16.0, false), None);
    assert_eq!(classifier.level_for(16.0, true), Some(HeadingLevel::H2));
    assert_eq!(classifier.level_for(12.4, true), Some(HeadingLevel::H3));
    assert_eq!(classifier.level_for(12.5, true), None);
}

#[test]
fn test_build_outline_is_deterministic() {
    let spans = sample_spans();
    let config = OutlineConfig::default();
    let first = build_outline(&spans, "a.pdf", &config);
    let second = build_outline(&spans, "a.pdf", &config);
    assert_eq!(first, second);
}

#[test]
fn test_orphan_h3_stays_at_root() {
    let outline = assemble(vec![
        HeadingCandidate::new(HeadingLevel::H3, "Preface note", 1),
        HeadingCandidate::new(HeadingLevel::H1, "Chapter", 2),
    ]);
    assert_eq!(outline.len(), 2);
    assert_eq!(outline[0].level, HeadingLevel::H3);
    assert!(outline[0].children.is_empty());
}
