//! Tests for the grouping passes: threshold semantics, ordering, and the
//! word/line/paragraph hierarchy invariants.

use blackout_core::layout::{
    Thresholds, build_layout, group_lines_into_paragraphs, group_words_into_lines,
};
use blackout_core::ocr::OcrToken;

fn word(text: &str, left: u32, top: u32) -> OcrToken {
    OcrToken::new(text, left, top, 30, 10)
}

fn sample_words() -> Vec<OcrToken> {
    vec![
        word("Alice", 0, 0),
        word("Smith", 35, 0),
        word("lives", 0, 12),
        word("here", 35, 12),
    ]
}

fn line_texts(paragraphs: &[blackout_core::layout::Paragraph]) -> Vec<String> {
    paragraphs
        .iter()
        .flat_map(|p| p.lines().iter().map(|l| l.get_text()))
        .collect()
}

#[test]
fn two_lines_one_paragraph() {
    let paragraphs = build_layout(&sample_words(), Thresholds::new(5, 20));

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].lines().len(), 2);
    assert_eq!(line_texts(&paragraphs), ["Alice Smith", "lives here"]);
}

#[test]
fn high_line_threshold_collapses_to_one_line() {
    let paragraphs = build_layout(&sample_words(), Thresholds::new(20, 20));

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(line_texts(&paragraphs), ["Alice Smith lives here"]);
}

#[test]
fn empty_input_yields_no_paragraphs() {
    let paragraphs = build_layout(&[], Thresholds::default());
    assert!(paragraphs.is_empty());
}

#[test]
fn single_word_yields_one_of_each() {
    let paragraphs = build_layout(&[word("only", 3, 7)], Thresholds::default());

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].lines().len(), 1);
    let words = paragraphs[0].lines()[0].words();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].text(), "only");
    assert_eq!(words[0].x(), 3);
    assert_eq!(words[0].y(), 7);
}

#[test]
fn blank_tokens_never_reach_the_layout() {
    let mut tokens = sample_words();
    tokens.insert(2, word("", 70, 0));
    tokens.push(word("   ", 70, 12));

    let paragraphs = build_layout(&tokens, Thresholds::new(5, 20));
    assert_eq!(line_texts(&paragraphs), ["Alice Smith", "lives here"]);
}

#[test]
fn word_text_is_trimmed() {
    let paragraphs = build_layout(&[word(" Alice ", 0, 0)], Thresholds::default());
    assert_eq!(paragraphs[0].lines()[0].words()[0].text(), "Alice");
}

#[test]
fn grouping_is_deterministic() {
    let tokens = sample_words();
    let first = build_layout(&tokens, Thresholds::new(5, 20));
    let second = build_layout(&tokens, Thresholds::new(5, 20));
    assert_eq!(first, second);
}

#[test]
fn raising_line_threshold_never_adds_lines() {
    let tokens: Vec<OcrToken> = [0u32, 3, 9, 18, 30, 45, 63, 84]
        .iter()
        .enumerate()
        .map(|(i, &top)| word("w", i as u32 * 40, top))
        .collect();

    let mut previous = usize::MAX;
    for threshold in 0..30 {
        let count = group_words_into_lines(&tokens, threshold).len();
        assert!(count <= previous);
        previous = count;
    }
}

#[test]
fn raising_paragraph_threshold_never_adds_paragraphs() {
    let tokens: Vec<OcrToken> = [0u32, 14, 28, 60, 74, 130, 144]
        .iter()
        .map(|&top| word("w", 0, top))
        .collect();
    let lines = group_words_into_lines(&tokens, 5);

    let mut previous = usize::MAX;
    for threshold in 0..80 {
        let count = group_lines_into_paragraphs(lines.clone(), threshold).len();
        assert!(count <= previous);
        previous = count;
    }
}

#[test]
fn scan_order_is_preserved_through_both_passes() {
    // Three well-separated rows, two words each; the second row's words
    // arrive right-to-left in the stream and must stay in stream order.
    let tokens = vec![
        word("a", 0, 0),
        word("b", 40, 0),
        word("d", 40, 50),
        word("c", 0, 50),
        word("e", 0, 100),
        word("f", 40, 100),
    ];

    let paragraphs = build_layout(&tokens, Thresholds::new(5, 20));
    assert_eq!(line_texts(&paragraphs), ["a b", "d c", "e f"]);
}
