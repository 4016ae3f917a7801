//! End-to-end tests for the high-level analysis API.

use blackout_core::high_level::{AnalyzeOptions, analyze_batch, analyze_tokens, analyze_tsv};
use blackout_core::layout::Thresholds;
use blackout_core::ocr::OcrToken;

fn word(text: &str, left: u32, top: u32) -> OcrToken {
    OcrToken::new(text, left, top, 30, 10)
}

fn two_block_page() -> Vec<OcrToken> {
    vec![
        word("Alice", 0, 0),
        word("Smith", 35, 0),
        word("lives", 0, 12),
        word("here", 35, 12),
        word("Signed", 0, 100),
        word("today", 40, 100),
    ]
}

fn fixed() -> Option<AnalyzeOptions> {
    Some(AnalyzeOptions {
        thresholds: Some(Thresholds::new(5, 20)),
    })
}

#[test]
fn document_text_separates_paragraphs_with_blank_lines() {
    let document = analyze_tokens(&two_block_page(), fixed());

    assert_eq!(document.paragraphs().len(), 2);
    insta::assert_snapshot!(document.text(), @r"
    Alice Smith lives here

    Signed today
    ");
}

#[test]
fn supplied_thresholds_bypass_estimation() {
    let document = analyze_tokens(&two_block_page(), fixed());
    assert_eq!(document.thresholds(), Thresholds::new(5, 20));
}

#[test]
fn missing_thresholds_are_estimated_together() {
    let tokens = two_block_page();
    let document = analyze_tokens(&tokens, None);

    assert_eq!(
        document.thresholds(),
        blackout_core::layout::estimate_thresholds(&tokens)
    );
}

#[test]
fn empty_token_stream_produces_an_empty_document() {
    let document = analyze_tokens(&[], None);
    assert!(document.paragraphs().is_empty());
    assert_eq!(document.text(), "");
}

#[test]
fn locate_goes_through_the_document() {
    let document = analyze_tokens(&two_block_page(), fixed());
    let boxes = document.locate(&["Alice Smith"]);

    assert_eq!(boxes.len(), 2);
    assert_eq!((boxes[0].x, boxes[0].y), (0, 0));
    assert_eq!((boxes[1].x, boxes[1].y), (35, 0));
}

#[test]
fn batch_analysis_matches_per_document_analysis() {
    let documents = vec![two_block_page(), vec![word("alone", 0, 0)], Vec::new()];

    let batched = analyze_batch(&documents, fixed());
    assert_eq!(batched.len(), 3);

    for (tokens, document) in documents.iter().zip(&batched) {
        let single = analyze_tokens(tokens, fixed());
        assert_eq!(single.text(), document.text());
        assert_eq!(single.thresholds(), document.thresholds());
    }
}

#[test]
fn tsv_input_flows_through_the_whole_pipeline() {
    let data = "\
level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext
1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t
5\t1\t1\t1\t1\t1\t0\t0\t30\t10\t95.1\tAlice
5\t1\t1\t1\t1\t2\t35\t0\t30\t10\t93.4\tSmith
5\t1\t1\t1\t2\t1\t0\t12\t30\t10\t91.8\tlives
5\t1\t1\t1\t2\t2\t35\t12\t30\t10\t90.2\there
";

    let document = analyze_tsv(data, fixed()).unwrap();
    assert_eq!(document.text(), "Alice Smith lives here");

    let boxes = document.locate(&["Smith"]);
    assert_eq!((boxes[0].x, boxes[0].y), (35, 0));
}

#[test]
fn malformed_tsv_surfaces_the_parse_error() {
    let data = "left\ttop\twidth\theight\tconf\ttext\nten\t0\t5\t5\t90\toops";
    assert!(analyze_tsv(data, None).is_err());
}
