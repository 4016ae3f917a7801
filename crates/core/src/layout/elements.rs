//! Layout elements: words, lines, paragraphs, and derived bounding boxes.
//!
//! Plain immutable records composed into ordered sequences. A Word is owned
//! by exactly one Line and a Line by exactly one Paragraph; nothing is
//! shared, back-referenced, or mutated once the grouping pass has run.

use itertools::Itertools;

/// Axis-aligned rectangle in image coordinates.
///
/// A derived read-only value copied from a Word (or the union over a
/// container's words); carries no ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A single OCR-recognized token with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Word {
    pub fn new(text: impl Into<String>, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn x(&self) -> u32 {
        self.x
    }

    pub const fn y(&self) -> u32 {
        self.y
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn bbox(&self) -> BoundingBox {
        BoundingBox {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// A vertically contiguous run of words judged to form one text line.
///
/// Insertion order is the grouping pass's scan order, not necessarily
/// left-to-right in screen space. A line under construction may be empty;
/// once appended to a paragraph it never is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    words: Vec<Word>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: Word) {
        self.words.push(word);
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Space-join of the word texts in insertion order.
    pub fn get_text(&self) -> String {
        self.words.iter().map(Word::text).join(" ")
    }

    /// Mean vertical position of the words.
    ///
    /// Lines are non-empty once appended to a paragraph, so the mean is
    /// defined wherever the paragraph pass calls it.
    pub fn avg_y(&self) -> f64 {
        self.words.iter().map(|w| f64::from(w.y)).sum::<f64>() / self.words.len() as f64
    }

    /// Min/max union of the word boxes, `None` for an empty line.
    pub fn bbox(&self) -> Option<BoundingBox> {
        union_bbox(self.words.iter())
    }
}

/// A block of lines judged to belong together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<Line>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Space-join of the line texts in insertion order.
    pub fn get_text(&self) -> String {
        self.lines.iter().map(Line::get_text).join(" ")
    }

    /// Min/max union of all word boxes, `None` for an empty paragraph.
    pub fn bbox(&self) -> Option<BoundingBox> {
        union_bbox(self.lines.iter().flat_map(|line| line.words.iter()))
    }
}

fn union_bbox<'a>(words: impl Iterator<Item = &'a Word> + Clone) -> Option<BoundingBox> {
    let x0 = words.clone().map(Word::x).min()?;
    let y0 = words.clone().map(Word::y).min()?;
    let x1 = words.clone().map(|w| w.x + w.width).max()?;
    let y1 = words.map(|w| w.y + w.height).max()?;
    Some(BoundingBox {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    })
}
