//! blackout - OCR layout reconstruction and sensitive-span location.
//!
//! Rebuilds the word/line/paragraph hierarchy of a scanned document from the
//! flat token stream an OCR engine emits, calibrating its grouping
//! thresholds from the document's own geometry, and maps detected sensitive
//! text fragments back to the word bounding boxes that realize them.

pub mod api;
pub mod error;
pub mod layout;
pub mod locate;
pub mod ocr;

// Re-export the high-level entry points
pub use api::high_level;

pub use error::{OcrError, Result};
