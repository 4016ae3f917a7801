//! Layout grouping thresholds.

/// Fallback line threshold when too few word gaps exist to cluster.
pub const DEFAULT_LINE_THRESHOLD: u32 = 10;

/// Fallback paragraph threshold when too few line gaps exist to cluster.
pub const DEFAULT_PARAGRAPH_THRESHOLD: u32 = 20;

/// Vertical-gap cutoffs for one document.
///
/// `line_threshold` separates words on the same text line from words that
/// open the next line; `paragraph_threshold` separates lines in the same
/// block from lines that open a new block. Units are image pixels, the same
/// space as the token bounding boxes. The pair is scoped to a single
/// document and never mutated after estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub line_threshold: u32,
    pub paragraph_threshold: u32,
}

impl Thresholds {
    pub const fn new(line_threshold: u32, paragraph_threshold: u32) -> Self {
        Self {
            line_threshold,
            paragraph_threshold,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            line_threshold: DEFAULT_LINE_THRESHOLD,
            paragraph_threshold: DEFAULT_PARAGRAPH_THRESHOLD,
        }
    }
}
