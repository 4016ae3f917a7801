//! Maps detected sensitive text fragments back to word bounding boxes.

use crate::layout::{BoundingBox, Paragraph};

/// Collects the bounding box of every word that realizes part of a
/// sensitive fragment.
///
/// For each paragraph whose concatenated text contains a fragment, every
/// word is checked against every whitespace-split sub-token of that
/// fragment; a sub-token occurring as a substring of the word's text emits
/// the word's box. Matching is substring-based, so a sub-token inside an
/// unrelated word also matches, a fragment found in several paragraphs
/// emits boxes for each, and nothing is de-duplicated. Output order follows
/// the paragraph, fragment, line, word, sub-token nesting. An empty result
/// is a valid outcome, not an error.
pub fn locate_fragments<S: AsRef<str>>(
    paragraphs: &[Paragraph],
    fragments: &[S],
) -> Vec<BoundingBox> {
    let mut boxes = Vec::new();

    for paragraph in paragraphs {
        let paragraph_text = paragraph.get_text();
        for fragment in fragments {
            let fragment = fragment.as_ref();
            if !paragraph_text.contains(fragment) {
                continue;
            }
            for line in paragraph.lines() {
                for word in line.words() {
                    for sub_token in fragment.split_whitespace() {
                        if word.text().contains(sub_token) {
                            boxes.push(word.bbox());
                        }
                    }
                }
            }
        }
    }

    boxes
}
