//! Word-to-line and line-to-paragraph grouping.
//!
//! Both passes are single forward scans over the OCR stream order; tokens
//! are never re-sorted. A vertical gap strictly greater than the threshold
//! opens a new container; a gap equal to the threshold does not.

use crate::layout::elements::{Line, Paragraph, Word};
use crate::layout::params::Thresholds;
use crate::ocr::{OcrToken, non_blank};

/// Groups recognized words into lines by vertical proximity.
///
/// Words land in the open line until one arrives whose top coordinate is
/// further than `line_threshold` from the previous word's, which closes the
/// line and opens the next. Blank tokens are skipped. An empty stream
/// yields no lines.
pub fn group_words_into_lines(tokens: &[OcrToken], line_threshold: u32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current_line = Line::new();
    let mut previous_y: Option<u32> = None;

    for token in non_blank(tokens) {
        if previous_y.is_some_and(|y| token.top.abs_diff(y) > line_threshold) {
            lines.push(std::mem::take(&mut current_line));
        }

        current_line.add_word(Word::new(
            token.text.trim(),
            token.left,
            token.top,
            token.width,
            token.height,
        ));
        previous_y = Some(token.top);
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Groups lines into paragraphs by the distance between their mean vertical
/// positions.
pub fn group_lines_into_paragraphs(lines: Vec<Line>, paragraph_threshold: u32) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current_paragraph = Paragraph::new();
    let mut previous_avg_y: Option<f64> = None;

    for line in lines {
        let avg_y = line.avg_y();

        if previous_avg_y.is_some_and(|y| (avg_y - y).abs() > f64::from(paragraph_threshold)) {
            paragraphs.push(std::mem::take(&mut current_paragraph));
        }

        current_paragraph.add_line(line);
        previous_avg_y = Some(avg_y);
    }

    if !current_paragraph.is_empty() {
        paragraphs.push(current_paragraph);
    }

    paragraphs
}

/// Runs both grouping passes with the given thresholds.
pub fn build_layout(tokens: &[OcrToken], thresholds: Thresholds) -> Vec<Paragraph> {
    let lines = group_words_into_lines(tokens, thresholds.line_threshold);
    group_lines_into_paragraphs(lines, thresholds.paragraph_threshold)
}
