//! High-level document analysis API.
//!
//! Provides the main public API for OCR layout reconstruction:
//! - `analyze_tokens()` - group one document's tokens into paragraphs
//! - `analyze_tsv()` - parse a Tesseract TSV dump and analyze it
//! - `analyze_batch()` - analyze independent documents in parallel

use itertools::Itertools;
use rayon::prelude::*;

use crate::error::Result;
use crate::layout::{BoundingBox, Paragraph, Thresholds, build_layout, estimate_thresholds};
use crate::locate::locate_fragments;
use crate::ocr::{OcrToken, parse_tsv};

/// Options for document analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Caller-supplied thresholds. `None` estimates both from the document
    /// itself. Supplying one without the other is not a supported mode, so
    /// the pair travels as a single value.
    pub thresholds: Option<Thresholds>,
}

/// An analyzed document: the paragraph hierarchy plus the thresholds that
/// produced it.
///
/// Built once in a single forward pass over the OCR output and read-only
/// afterwards; this is the one artifact everything downstream consumes.
#[derive(Debug, Clone)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
    thresholds: Thresholds,
}

impl Document {
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub const fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Full document text: paragraph texts separated by blank lines.
    pub fn text(&self) -> String {
        self.paragraphs.iter().map(Paragraph::get_text).join("\n\n")
    }

    /// Bounding boxes of the words realizing the given sensitive fragments.
    ///
    /// Duplicates are possible; see [`locate_fragments`].
    pub fn locate<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<BoundingBox> {
        locate_fragments(&self.paragraphs, fragments)
    }
}

/// Analyzes one document's token stream.
///
/// Never fails: degenerate inputs fall back to the default thresholds and
/// an empty token stream produces a document with no paragraphs.
pub fn analyze_tokens(tokens: &[OcrToken], options: Option<AnalyzeOptions>) -> Document {
    let options = options.unwrap_or_default();
    let thresholds = options
        .thresholds
        .unwrap_or_else(|| estimate_thresholds(tokens));

    Document {
        paragraphs: build_layout(tokens, thresholds),
        thresholds,
    }
}

/// Parses a Tesseract `image_to_data` TSV dump and analyzes it.
pub fn analyze_tsv(data: &str, options: Option<AnalyzeOptions>) -> Result<Document> {
    let tokens = parse_tsv(data)?;
    Ok(analyze_tokens(&tokens, options))
}

/// Analyzes independent documents in parallel.
///
/// Documents share no state, so each complete pipeline runs on its own
/// worker. Output order matches input order.
pub fn analyze_batch(documents: &[Vec<OcrToken>], options: Option<AnalyzeOptions>) -> Vec<Document> {
    documents
        .par_iter()
        .map(|tokens| analyze_tokens(tokens, options.clone()))
        .collect()
}
